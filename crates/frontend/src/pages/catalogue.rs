//! Витрина: публичные страницы видят только опубликованные записи

use contracts::domain::a002_tour::aggregate::{Tour, TourStatus};
use contracts::domain::a003_gallery_item::aggregate::{GalleryItem, GalleryStatus};
use contracts::domain::a004_blog_post::aggregate::BlogPost;
use contracts::domain::common::{Facet, Record};
use contracts::shared::list_view::RecordStore;

/// Запись, которую можно показать посетителю сайта
pub trait PublicRecord: Record {
    fn is_public(&self) -> bool;
}

impl PublicRecord for Tour {
    fn is_public(&self) -> bool {
        self.status == TourStatus::Active
    }
}

impl PublicRecord for GalleryItem {
    fn is_public(&self) -> bool {
        self.status == GalleryStatus::Active
    }
}

impl PublicRecord for BlogPost {
    fn is_public(&self) -> bool {
        self.status.is_published()
    }
}

/// Хранилище витрины из демо-данных
pub fn public_store<R: PublicRecord>(records: Vec<R>) -> RecordStore<R> {
    let public = records.into_iter().filter(PublicRecord::is_public).collect();
    RecordStore::from_records(public).unwrap_or_else(|e| {
        log::error!("{}: invalid catalogue data: {}", R::list_name(), e);
        RecordStore::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_tour::seed::seed_tours;
    use contracts::domain::a004_blog_post::seed::seed_blog_posts;
    use contracts::domain::common::RecordId;

    #[test]
    fn test_catalogue_hides_unpublished_tours() {
        let seed = seed_tours();
        let hidden: Vec<RecordId> = seed
            .iter()
            .filter(|t| t.status != TourStatus::Active)
            .map(|t| t.id.clone())
            .collect();
        assert!(!hidden.is_empty());

        let store = public_store(seed);
        assert!(store.iter().all(|t| t.status == TourStatus::Active));
        for id in &hidden {
            assert!(store.get(id).is_none());
        }
    }

    #[test]
    fn test_blog_lists_published_only() {
        let store = public_store(seed_blog_posts());
        assert!(!store.is_empty());
        assert!(store.iter().all(|p| p.status.is_published()));
    }
}
