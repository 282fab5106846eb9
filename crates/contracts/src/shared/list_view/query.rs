use crate::domain::common::{FacetFilter, Record, SortKey};

/// Параметры выборки списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<R: Record> {
    pub search: String,
    pub status: FacetFilter<R::Status>,
    pub category: FacetFilter<R::Category>,
    pub sort: R::Sort,
}

impl<R: Record> Default for ListQuery<R> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FacetFilter::All,
            category: FacetFilter::All,
            sort: R::Sort::default(),
        }
    }
}

impl<R: Record> ListQuery<R> {
    /// Поиск И статус И категория
    pub fn matches(&self, record: &R) -> bool {
        record.matches_search(&self.search)
            && self.status.matches(record.status())
            && self.category.matches(record.category())
    }

    /// Задан ли хоть один фильтр (сортировка не считается)
    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || !self.status.is_all() || !self.category.is_all()
    }
}

/// Отфильтровать и отсортировать записи. Хранилище не меняется.
///
/// Сортировка стабильная; ключ по умолчанию сохраняет исходный порядок.
pub fn apply_query<'a, R, I>(records: I, query: &ListQuery<R>) -> Vec<&'a R>
where
    R: Record,
    I: IntoIterator<Item = &'a R>,
{
    let mut result: Vec<&R> = records.into_iter().filter(|r| query.matches(r)).collect();
    if !query.sort.is_default() {
        result.sort_by(|a, b| a.compare_by(b, query.sort));
    }
    result
}

/// Целое число в начале строки: "7 days" -> 7, " 10-12 days" -> 10
pub fn parse_leading_int(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("7 days"), Some(7));
        assert_eq!(parse_leading_int("  14 days"), Some(14));
        assert_eq!(parse_leading_int("10-12 days"), Some(10));
        assert_eq!(parse_leading_int("about a week"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
