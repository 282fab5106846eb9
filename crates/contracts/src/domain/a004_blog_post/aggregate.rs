use crate::domain::common::{Choice, Facet, Lifecycle, MediaRef, Record, RecordId, SortKey};
use crate::enums::BadgeVariant;
use crate::shared::list_view::parse_leading_int;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Facets
// ============================================================================

/// Статус публикации поста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Published,
    Draft,
    Archived,
}

impl Choice for BlogStatus {
    fn all() -> &'static [Self] {
        &[BlogStatus::Published, BlogStatus::Draft, BlogStatus::Archived]
    }

    fn code(&self) -> &'static str {
        match self {
            BlogStatus::Published => "published",
            BlogStatus::Draft => "draft",
            BlogStatus::Archived => "archived",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BlogStatus::Published => "Published",
            BlogStatus::Draft => "Draft",
            BlogStatus::Archived => "Archived",
        }
    }
}

impl Facet for BlogStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            BlogStatus::Published => BadgeVariant::Success,
            BlogStatus::Draft => BadgeVariant::Warning,
            BlogStatus::Archived => BadgeVariant::Neutral,
        }
    }

    fn is_published(&self) -> bool {
        matches!(self, BlogStatus::Published)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Destinations,
    Tips,
    Culture,
    Adventure,
    Food,
    Photography,
}

impl Choice for BlogCategory {
    fn all() -> &'static [Self] {
        &[
            BlogCategory::Destinations,
            BlogCategory::Tips,
            BlogCategory::Culture,
            BlogCategory::Adventure,
            BlogCategory::Food,
            BlogCategory::Photography,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BlogCategory::Destinations => "destinations",
            BlogCategory::Tips => "tips",
            BlogCategory::Culture => "culture",
            BlogCategory::Adventure => "adventure",
            BlogCategory::Food => "food",
            BlogCategory::Photography => "photography",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BlogCategory::Destinations => "Destinations",
            BlogCategory::Tips => "Travel Tips",
            BlogCategory::Culture => "Culture",
            BlogCategory::Adventure => "Adventure",
            BlogCategory::Food => "Food & Cuisine",
            BlogCategory::Photography => "Photography",
        }
    }
}

impl Facet for BlogCategory {
    fn badge(&self) -> BadgeVariant {
        match self {
            BlogCategory::Destinations => BadgeVariant::Primary,
            BlogCategory::Tips => BadgeVariant::Success,
            BlogCategory::Culture | BlogCategory::Photography => BadgeVariant::Neutral,
            BlogCategory::Adventure | BlogCategory::Food => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogSort {
    #[default]
    Default,
    Title,
    Newest,
    Oldest,
    ReadTimeShort,
    ReadTimeLong,
}

impl Choice for BlogSort {
    fn all() -> &'static [Self] {
        &[
            BlogSort::Default,
            BlogSort::Title,
            BlogSort::Newest,
            BlogSort::Oldest,
            BlogSort::ReadTimeShort,
            BlogSort::ReadTimeLong,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BlogSort::Default => "default",
            BlogSort::Title => "title",
            BlogSort::Newest => "newest",
            BlogSort::Oldest => "oldest",
            BlogSort::ReadTimeShort => "read-time-short",
            BlogSort::ReadTimeLong => "read-time-long",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BlogSort::Default => "Default",
            BlogSort::Title => "Title (A-Z)",
            BlogSort::Newest => "Most Recent",
            BlogSort::Oldest => "Oldest First",
            BlogSort::ReadTimeShort => "Shortest Read",
            BlogSort::ReadTimeLong => "Longest Read",
        }
    }
}

impl SortKey for BlogSort {}

// ============================================================================
// Aggregate
// ============================================================================

/// Пост блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,

    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub featured: bool,
    pub status: BlogStatus,
    #[serde(rename = "readTime")]
    pub read_time: String,
    #[serde(rename = "imageUrl")]
    pub image: MediaRef,
    /// Выводится из заголовка
    pub slug: String,
}

impl BlogPost {
    /// Дата для сортировки "по свежести": публикация, иначе создание
    fn recency(&self) -> chrono::DateTime<chrono::Utc> {
        self.lifecycle
            .published_at
            .unwrap_or(self.lifecycle.created_at)
    }

    /// Минуты чтения из "5 min read"
    fn read_minutes(&self) -> Option<u32> {
        parse_leading_int(&self.read_time)
    }

    /// Непарсящееся время чтения уходит в конец при любом направлении
    fn compare_read_time(&self, other: &Self, longest_first: bool) -> Ordering {
        match (self.read_minutes(), other.read_minutes()) {
            (Some(a), Some(b)) if longest_first => b.cmp(&a),
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// "10 Must-Visit Destinations!" -> "10-must-visit-destinations"
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

impl Record for BlogPost {
    type Status = BlogStatus;
    type Category = BlogCategory;
    type Sort = BlogSort;
    type Dto = BlogPostDto;

    fn element_name() -> &'static str {
        "Blog Post"
    }

    fn list_name() -> &'static str {
        "Blog Posts"
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

    fn status(&self) -> BlogStatus {
        self.status
    }

    fn category(&self) -> BlogCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.author.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn compare_by(&self, other: &Self, sort: BlogSort) -> Ordering {
        match sort {
            BlogSort::Default => Ordering::Equal,
            BlogSort::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            BlogSort::Newest => other.recency().cmp(&self.recency()),
            BlogSort::Oldest => self.recency().cmp(&other.recency()),
            BlogSort::ReadTimeShort => self.compare_read_time(other, false),
            BlogSort::ReadTimeLong => self.compare_read_time(other, true),
        }
    }

    fn template() -> BlogPostDto {
        BlogPostDto {
            title: Some(String::new()),
            excerpt: Some(String::new()),
            content: Some(String::new()),
            author: Some("Admin".to_string()),
            category: Some(BlogCategory::Destinations),
            tags: Some(Vec::new()),
            featured: Some(false),
            status: Some(BlogStatus::Draft),
            read_time: Some("5 min read".to_string()),
            image: Some(MediaRef::default()),
        }
    }

    fn from_dto(id: RecordId, lifecycle: Lifecycle, dto: BlogPostDto) -> Self {
        let title = dto.title.unwrap_or_default();
        Self {
            id,
            lifecycle,
            slug: slugify(&title),
            title,
            excerpt: dto.excerpt.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            author: dto.author.unwrap_or_else(|| "Admin".to_string()),
            category: dto.category.unwrap_or(BlogCategory::Destinations),
            tags: dto.tags.unwrap_or_default(),
            featured: dto.featured.unwrap_or(false),
            status: dto.status.unwrap_or(BlogStatus::Draft),
            read_time: dto.read_time.unwrap_or_else(|| "5 min read".to_string()),
            image: dto.image.unwrap_or_default(),
        }
    }

    fn apply(&mut self, dto: BlogPostDto) {
        if let Some(v) = dto.title {
            // Пустой заголовок не затирает существующий slug
            let slug = slugify(&v);
            if !slug.is_empty() {
                self.slug = slug;
            }
            self.title = v;
        }
        if let Some(v) = dto.excerpt {
            self.excerpt = v;
        }
        if let Some(v) = dto.content {
            self.content = v;
        }
        if let Some(v) = dto.author {
            self.author = v;
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
        if let Some(v) = dto.read_time {
            self.read_time = v;
        }
        if let Some(v) = dto.image {
            self.image = v;
        }
    }

    fn to_dto(&self) -> BlogPostDto {
        BlogPostDto {
            title: Some(self.title.clone()),
            excerpt: Some(self.excerpt.clone()),
            content: Some(self.content.clone()),
            author: Some(self.author.clone()),
            category: Some(self.category),
            tags: Some(self.tags.clone()),
            featured: Some(self.featured),
            status: Some(self.status),
            read_time: Some(self.read_time.clone()),
            image: Some(self.image.clone()),
        }
    }

    fn set_media(dto: &mut BlogPostDto, media: MediaRef) {
        dto.image = Some(media);
    }

    fn tags_mut(dto: &mut BlogPostDto) -> Option<&mut Vec<String>> {
        Some(dto.tags.get_or_insert_with(Vec::new))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDto {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<BlogCategory>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<BlogStatus>,
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image: Option<MediaRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("10 Must-Visit Destinations in Southeast Asia"),
            "10-must-visit-destinations-in-southeast-asia"
        );
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_retitle_updates_slug() {
        let mut post = BlogPost::from_dto(
            RecordId::new("1"),
            Lifecycle::new(utc_date(2024, 3, 1)),
            BlogPostDto {
                title: Some("Hidden Gems".into()),
                ..Default::default()
            },
        );
        assert_eq!(post.slug, "hidden-gems");

        post.apply(BlogPostDto {
            title: Some("Hidden Gems of Eastern Europe".into()),
            ..Default::default()
        });
        assert_eq!(post.slug, "hidden-gems-of-eastern-europe");

        post.apply(BlogPostDto {
            title: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(post.slug, "hidden-gems-of-eastern-europe");
    }

    fn post(id: &str, read_time: &str) -> BlogPost {
        BlogPost::from_dto(
            RecordId::new(id),
            Lifecycle::new(utc_date(2024, 3, 1)),
            BlogPostDto {
                read_time: Some(read_time.to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_read_time_sort_puts_unparsable_last() {
        let short = post("a", "4 min read");
        let long = post("b", "12 min read");
        let odd = post("c", "quick read");

        assert_eq!(short.compare_by(&long, BlogSort::ReadTimeShort), Ordering::Less);
        assert_eq!(short.compare_by(&long, BlogSort::ReadTimeLong), Ordering::Greater);
        assert_eq!(odd.compare_by(&short, BlogSort::ReadTimeShort), Ordering::Greater);
        assert_eq!(odd.compare_by(&long, BlogSort::ReadTimeLong), Ordering::Greater);
        assert_eq!(BlogSort::from_code("read-time-long"), Some(BlogSort::ReadTimeLong));
    }

    #[test]
    fn test_only_published_is_published() {
        assert!(BlogStatus::Published.is_published());
        assert!(!BlogStatus::Draft.is_published());
        assert!(!BlogStatus::Archived.is_published());
    }
}
