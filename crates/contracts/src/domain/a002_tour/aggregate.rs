use crate::domain::common::{
    Choice, Facet, Lifecycle, MediaRef, Record, RecordId, SortKey,
};
use crate::enums::BadgeVariant;
use crate::shared::list_view::parse_leading_int;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Facets
// ============================================================================

/// Статус тура
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Active,
    Inactive,
    Draft,
}

impl Choice for TourStatus {
    fn all() -> &'static [Self] {
        &[TourStatus::Active, TourStatus::Inactive, TourStatus::Draft]
    }

    fn code(&self) -> &'static str {
        match self {
            TourStatus::Active => "active",
            TourStatus::Inactive => "inactive",
            TourStatus::Draft => "draft",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TourStatus::Active => "Active",
            TourStatus::Inactive => "Inactive",
            TourStatus::Draft => "Draft",
        }
    }
}

impl Facet for TourStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            TourStatus::Active => BadgeVariant::Success,
            TourStatus::Inactive => BadgeVariant::Error,
            TourStatus::Draft => BadgeVariant::Warning,
        }
    }
}

/// Категория тура
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourCategory {
    Adventure,
    Cultural,
    Relaxation,
}

impl Choice for TourCategory {
    fn all() -> &'static [Self] {
        &[
            TourCategory::Adventure,
            TourCategory::Cultural,
            TourCategory::Relaxation,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            TourCategory::Adventure => "adventure",
            TourCategory::Cultural => "cultural",
            TourCategory::Relaxation => "relaxation",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TourCategory::Adventure => "Adventure",
            TourCategory::Cultural => "Cultural",
            TourCategory::Relaxation => "Relaxation",
        }
    }
}

impl Facet for TourCategory {
    fn badge(&self) -> BadgeVariant {
        match self {
            TourCategory::Adventure => BadgeVariant::Warning,
            TourCategory::Cultural => BadgeVariant::Primary,
            TourCategory::Relaxation => BadgeVariant::Success,
        }
    }
}

/// Сложность тура
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Choice for Difficulty {
    fn all() -> &'static [Self] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Меню сортировки туров
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourSort {
    /// Порядок хранилища
    #[default]
    Popular,
    Title,
    PriceLow,
    PriceHigh,
    Rating,
    Duration,
}

impl Choice for TourSort {
    fn all() -> &'static [Self] {
        &[
            TourSort::Popular,
            TourSort::Title,
            TourSort::PriceLow,
            TourSort::PriceHigh,
            TourSort::Rating,
            TourSort::Duration,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            TourSort::Popular => "popular",
            TourSort::Title => "title",
            TourSort::PriceLow => "price-low",
            TourSort::PriceHigh => "price-high",
            TourSort::Rating => "rating",
            TourSort::Duration => "duration",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TourSort::Popular => "Most Popular",
            TourSort::Title => "Title (A-Z)",
            TourSort::PriceLow => "Price: Low to High",
            TourSort::PriceHigh => "Price: High to Low",
            TourSort::Rating => "Highest Rated",
            TourSort::Duration => "Duration",
        }
    }
}

impl SortKey for TourSort {}

// ============================================================================
// Aggregate
// ============================================================================

/// Тур
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: RecordId,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,

    pub title: String,
    pub description: String,
    /// Цена в долларах
    pub price: u32,
    /// Свободный текст вида "7 days"
    pub duration: String,
    pub location: String,
    pub category: TourCategory,
    pub rating: f32,
    pub image: MediaRef,
    pub status: TourStatus,
    pub featured: bool,
    #[serde(rename = "maxParticipants")]
    pub max_participants: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl Tour {
    /// Количество дней из строки длительности
    pub fn duration_days(&self) -> Option<u32> {
        parse_leading_int(&self.duration)
    }
}

impl Record for Tour {
    type Status = TourStatus;
    type Category = TourCategory;
    type Sort = TourSort;
    type Dto = TourDto;

    fn element_name() -> &'static str {
        "Tour"
    }

    fn list_name() -> &'static str {
        "Tours"
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> TourStatus {
        self.status
    }

    fn category(&self) -> TourCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn compare_by(&self, other: &Self, sort: TourSort) -> Ordering {
        match sort {
            TourSort::Popular => Ordering::Equal,
            TourSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            TourSort::PriceLow => self.price.cmp(&other.price),
            TourSort::PriceHigh => other.price.cmp(&self.price),
            TourSort::Rating => other
                .rating
                .partial_cmp(&self.rating)
                .unwrap_or(Ordering::Equal),
            // Непарсящиеся длительности уходят в конец
            TourSort::Duration => match (self.duration_days(), other.duration_days()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    fn template() -> TourDto {
        TourDto {
            title: Some(String::new()),
            description: Some(String::new()),
            price: Some(0),
            duration: Some(String::new()),
            location: Some(String::new()),
            category: Some(TourCategory::Adventure),
            rating: Some(0.0),
            image: Some(MediaRef::default()),
            status: Some(TourStatus::Draft),
            featured: Some(false),
            max_participants: Some(10),
            difficulty: Some(Difficulty::Easy),
            tags: Some(Vec::new()),
        }
    }

    fn from_dto(id: RecordId, lifecycle: Lifecycle, dto: TourDto) -> Self {
        Self {
            id,
            lifecycle,
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            price: dto.price.unwrap_or(0),
            duration: dto.duration.unwrap_or_default(),
            location: dto.location.unwrap_or_default(),
            category: dto.category.unwrap_or(TourCategory::Adventure),
            rating: dto.rating.unwrap_or(0.0),
            image: dto.image.unwrap_or_default(),
            status: dto.status.unwrap_or(TourStatus::Draft),
            featured: dto.featured.unwrap_or(false),
            max_participants: dto.max_participants.unwrap_or(10),
            difficulty: dto.difficulty.unwrap_or(Difficulty::Easy),
            tags: dto.tags.unwrap_or_default(),
        }
    }

    fn apply(&mut self, dto: TourDto) {
        if let Some(v) = dto.title {
            self.title = v;
        }
        if let Some(v) = dto.description {
            self.description = v;
        }
        if let Some(v) = dto.price {
            self.price = v;
        }
        if let Some(v) = dto.duration {
            self.duration = v;
        }
        if let Some(v) = dto.location {
            self.location = v;
        }
        if let Some(v) = dto.category {
            self.category = v;
        }
        if let Some(v) = dto.rating {
            self.rating = v;
        }
        if let Some(v) = dto.image {
            self.image = v;
        }
        if let Some(v) = dto.status {
            self.status = v;
        }
        if let Some(v) = dto.featured {
            self.featured = v;
        }
        if let Some(v) = dto.max_participants {
            self.max_participants = v;
        }
        if let Some(v) = dto.difficulty {
            self.difficulty = v;
        }
        if let Some(v) = dto.tags {
            self.tags = v;
        }
    }

    fn to_dto(&self) -> TourDto {
        TourDto {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            price: Some(self.price),
            duration: Some(self.duration.clone()),
            location: Some(self.location.clone()),
            category: Some(self.category),
            rating: Some(self.rating),
            image: Some(self.image.clone()),
            status: Some(self.status),
            featured: Some(self.featured),
            max_participants: Some(self.max_participants),
            difficulty: Some(self.difficulty),
            tags: Some(self.tags.clone()),
        }
    }

    fn set_media(dto: &mut TourDto, media: MediaRef) {
        dto.image = Some(media);
    }

    fn tags_mut(dto: &mut TourDto) -> Option<&mut Vec<String>> {
        Some(dto.tags.get_or_insert_with(Vec::new))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления тура
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub category: Option<TourCategory>,
    pub rating: Option<f32>,
    pub image: Option<MediaRef>,
    pub status: Option<TourStatus>,
    pub featured: Option<bool>,
    #[serde(rename = "maxParticipants")]
    pub max_participants: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    fn tour(id: &str, duration: &str) -> Tour {
        Tour::from_dto(
            RecordId::new(id),
            Lifecycle::new(utc_date(2024, 1, 1)),
            TourDto {
                duration: Some(duration.to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_defaults_from_empty_dto() {
        let t = tour("1", "");
        assert_eq!(t.status, TourStatus::Draft);
        assert_eq!(t.category, TourCategory::Adventure);
        assert_eq!(t.difficulty, Difficulty::Easy);
        assert_eq!(t.max_participants, 10);
        assert!(t.tags.is_empty());
        assert!(t.image.is_empty());
    }

    #[test]
    fn test_duration_sort_puts_unparsable_last() {
        let a = tour("a", "7 days");
        let b = tour("b", "about a week");
        let c = tour("c", "14 days");
        assert_eq!(a.compare_by(&c, TourSort::Duration), Ordering::Less);
        assert_eq!(a.compare_by(&b, TourSort::Duration), Ordering::Less);
        assert_eq!(b.compare_by(&c, TourSort::Duration), Ordering::Greater);
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut t = tour("1", "7 days");
        t.apply(TourDto {
            price: Some(1200),
            ..Default::default()
        });
        assert_eq!(t.price, 1200);
        assert_eq!(t.duration, "7 days");
    }

    #[test]
    fn test_dto_from_partial_json() {
        let dto: TourDto = serde_json::from_str(
            r#"{"title":"Bali Retreat","status":"active","maxParticipants":12}"#,
        )
        .unwrap();
        assert_eq!(dto.title.as_deref(), Some("Bali Retreat"));
        assert_eq!(dto.status, Some(TourStatus::Active));
        assert_eq!(dto.max_participants, Some(12));
        assert_eq!(dto.price, None);
    }

    #[test]
    fn test_sort_codes_round_trip_through_menu() {
        for sort in TourSort::all() {
            assert_eq!(TourSort::from_code(sort.code()), Some(*sort));
        }
        assert!(TourSort::Popular.is_default());
    }
}
