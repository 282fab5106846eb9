use crate::enums::BadgeVariant;
use serde::{Deserialize, Serialize};

/// Значение из фиксированного меню (фасет или ключ сортировки).
///
/// `code` - стабильное значение для `<select>`, `display_name` - подпись в UI.
pub trait Choice: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Все значения в порядке отображения
    fn all() -> &'static [Self];

    /// Получить код значения
    fn code(&self) -> &'static str;

    /// Получить человекочитаемое название
    fn display_name(&self) -> &'static str;

    /// Парсинг из кода
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }
}

/// Перечислимый классификатор записи (статус, категория), по которому фильтруют список
pub trait Facet: Choice {
    /// Вариант бейджа для отображения значения
    fn badge(&self) -> BadgeVariant;

    /// Является ли значение "опубликованным" (управляет `published_at`)
    fn is_published(&self) -> bool {
        false
    }
}

/// Ключ сортировки списка. `Default::default()` сохраняет порядок хранилища.
pub trait SortKey: Choice + Default {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Селектор фасета: "all" или конкретное значение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetFilter<F> {
    All,
    Only(F),
}

impl<F> Default for FacetFilter<F> {
    fn default() -> Self {
        FacetFilter::All
    }
}

impl<F: Facet> FacetFilter<F> {
    pub const ALL_CODE: &'static str = "all";

    /// `All` пропускает любую запись, `Only(v)` требует точного равенства
    pub fn matches(&self, value: F) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(expected) => *expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    pub fn code(&self) -> &'static str {
        match self {
            FacetFilter::All => Self::ALL_CODE,
            FacetFilter::Only(value) => value.code(),
        }
    }

    /// Неизвестный код трактуется как "all"
    pub fn from_code(code: &str) -> Self {
        F::from_code(code).map_or(FacetFilter::All, FacetFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tour::aggregate::TourStatus;

    #[test]
    fn test_facet_filter_matches() {
        assert!(FacetFilter::<TourStatus>::All.matches(TourStatus::Draft));
        assert!(FacetFilter::Only(TourStatus::Active).matches(TourStatus::Active));
        assert!(!FacetFilter::Only(TourStatus::Active).matches(TourStatus::Inactive));
    }

    #[test]
    fn test_facet_filter_codes() {
        assert_eq!(FacetFilter::<TourStatus>::from_code("all"), FacetFilter::All);
        assert_eq!(
            FacetFilter::<TourStatus>::from_code("draft"),
            FacetFilter::Only(TourStatus::Draft)
        );
        assert_eq!(FacetFilter::<TourStatus>::from_code("bogus"), FacetFilter::All);
        assert_eq!(FacetFilter::Only(TourStatus::Inactive).code(), "inactive");
    }
}
