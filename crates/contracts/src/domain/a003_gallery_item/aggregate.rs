use crate::domain::common::{Choice, Facet, Lifecycle, MediaRef, Record, RecordId, SortKey};
use crate::enums::BadgeVariant;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Facets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryStatus {
    Active,
    Inactive,
}

impl Choice for GalleryStatus {
    fn all() -> &'static [Self] {
        &[GalleryStatus::Active, GalleryStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            GalleryStatus::Active => "active",
            GalleryStatus::Inactive => "inactive",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GalleryStatus::Active => "Active",
            GalleryStatus::Inactive => "Inactive",
        }
    }
}

impl Facet for GalleryStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            GalleryStatus::Active => BadgeVariant::Success,
            GalleryStatus::Inactive => BadgeVariant::Error,
        }
    }
}

/// Категория изображения галереи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Nature,
    Beach,
    Culture,
    Adventure,
    Urban,
    Food,
}

impl Choice for GalleryCategory {
    fn all() -> &'static [Self] {
        &[
            GalleryCategory::Nature,
            GalleryCategory::Beach,
            GalleryCategory::Culture,
            GalleryCategory::Adventure,
            GalleryCategory::Urban,
            GalleryCategory::Food,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            GalleryCategory::Nature => "nature",
            GalleryCategory::Beach => "beach",
            GalleryCategory::Culture => "culture",
            GalleryCategory::Adventure => "adventure",
            GalleryCategory::Urban => "urban",
            GalleryCategory::Food => "food",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GalleryCategory::Nature => "Nature",
            GalleryCategory::Beach => "Beach",
            GalleryCategory::Culture => "Culture",
            GalleryCategory::Adventure => "Adventure",
            GalleryCategory::Urban => "Urban",
            GalleryCategory::Food => "Food",
        }
    }
}

impl Facet for GalleryCategory {
    fn badge(&self) -> BadgeVariant {
        match self {
            GalleryCategory::Nature | GalleryCategory::Beach => BadgeVariant::Success,
            GalleryCategory::Culture | GalleryCategory::Urban => BadgeVariant::Primary,
            GalleryCategory::Adventure | GalleryCategory::Food => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GallerySort {
    #[default]
    Default,
    Title,
    Newest,
}

impl Choice for GallerySort {
    fn all() -> &'static [Self] {
        &[GallerySort::Default, GallerySort::Title, GallerySort::Newest]
    }

    fn code(&self) -> &'static str {
        match self {
            GallerySort::Default => "default",
            GallerySort::Title => "title",
            GallerySort::Newest => "newest",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GallerySort::Default => "Default",
            GallerySort::Title => "Title (A-Z)",
            GallerySort::Newest => "Recently Uploaded",
        }
    }
}

impl SortKey for GallerySort {}

// ============================================================================
// Aggregate
// ============================================================================

/// Изображение галереи. `created_at` - дата загрузки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: RecordId,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,

    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image: MediaRef,
    pub category: GalleryCategory,
    pub tags: Vec<String>,
    pub featured: bool,
    pub status: GalleryStatus,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    pub alt: String,
}

impl Record for GalleryItem {
    type Status = GalleryStatus;
    type Category = GalleryCategory;
    type Sort = GallerySort;
    type Dto = GalleryItemDto;

    fn element_name() -> &'static str {
        "Gallery Item"
    }

    fn list_name() -> &'static str {
        "Gallery"
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

    fn status(&self) -> GalleryStatus {
        self.status
    }

    fn category(&self) -> GalleryCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn compare_by(&self, other: &Self, sort: GallerySort) -> Ordering {
        match sort {
            GallerySort::Default => Ordering::Equal,
            GallerySort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            GallerySort::Newest => other.lifecycle.created_at.cmp(&self.lifecycle.created_at),
        }
    }

    fn template() -> GalleryItemDto {
        GalleryItemDto {
            title: Some(String::new()),
            description: Some(String::new()),
            image: Some(MediaRef::default()),
            category: Some(GalleryCategory::Nature),
            tags: Some(Vec::new()),
            featured: Some(false),
            status: Some(GalleryStatus::Inactive),
            uploaded_by: Some("Admin".to_string()),
            alt: Some(String::new()),
        }
    }

    fn from_dto(id: RecordId, lifecycle: Lifecycle, dto: GalleryItemDto) -> Self {
        Self {
            id,
            lifecycle,
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            image: dto.image.unwrap_or_default(),
            category: dto.category.unwrap_or(GalleryCategory::Nature),
            tags: dto.tags.unwrap_or_default(),
            featured: dto.featured.unwrap_or(false),
            status: dto.status.unwrap_or(GalleryStatus::Inactive),
            uploaded_by: dto.uploaded_by.unwrap_or_else(|| "Admin".to_string()),
            alt: dto.alt.unwrap_or_default(),
        }
    }

    fn apply(&mut self, dto: GalleryItemDto) {
        if let Some(v) = dto.title {
            self.title = v;
        }
        if let Some(v) = dto.description {
            self.description = v;
        }
        if let Some(v) = dto.image {
            self.image = v;
        }
        if let Some(v) = dto.category {
            self.category = v;
        }
        if let Some(v) = dto.tags {
            self.tags = v;
        }
        if let Some(v) = dto.featured {
            self.featured = v;
        }
        if let Some(v) = dto.status {
            self.status = v;
        }
        if let Some(v) = dto.uploaded_by {
            self.uploaded_by = v;
        }
        if let Some(v) = dto.alt {
            self.alt = v;
        }
    }

    fn to_dto(&self) -> GalleryItemDto {
        GalleryItemDto {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            image: Some(self.image.clone()),
            category: Some(self.category),
            tags: Some(self.tags.clone()),
            featured: Some(self.featured),
            status: Some(self.status),
            uploaded_by: Some(self.uploaded_by.clone()),
            alt: Some(self.alt.clone()),
        }
    }

    fn set_media(dto: &mut GalleryItemDto, media: MediaRef) {
        dto.image = Some(media);
    }

    fn tags_mut(dto: &mut GalleryItemDto) -> Option<&mut Vec<String>> {
        Some(dto.tags.get_or_insert_with(Vec::new))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryItemDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image: Option<MediaRef>,
    pub category: Option<GalleryCategory>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<GalleryStatus>,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: Option<String>,
    pub alt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    #[test]
    fn test_tags_are_searchable() {
        let item = GalleryItem::from_dto(
            RecordId::new("1"),
            Lifecycle::new(utc_date(2024, 1, 15)),
            GalleryItemDto {
                title: Some("Mountain Sunrise".into()),
                tags: Some(vec!["landscape".into()]),
                ..Default::default()
            },
        );
        assert!(item.matches_search("LandScape"));
        assert!(!item.matches_search("ocean"));
        assert_eq!(item.status, GalleryStatus::Inactive);
        assert_eq!(item.uploaded_by, "Admin");
    }
}
