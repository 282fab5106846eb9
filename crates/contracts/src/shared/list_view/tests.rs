use super::*;
use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_tour::aggregate::{Tour, TourCategory, TourDto, TourSort, TourStatus};
use crate::domain::a002_tour::seed::seed_tours;
use crate::domain::a003_gallery_item::aggregate::{GalleryCategory, GalleryItem};
use crate::domain::a003_gallery_item::seed::seed_gallery_items;
use crate::domain::a004_blog_post::aggregate::{BlogPost, BlogPostDto, BlogStatus};
use crate::domain::a004_blog_post::seed::seed_blog_posts;
use crate::domain::common::{
    utc_date, FacetFilter, Lifecycle, ListViewError, Record, RecordId, StoreError,
};

fn tour(id: &str, title: &str, status: TourStatus, category: TourCategory, price: u32) -> Tour {
    Tour::from_dto(
        RecordId::new(id),
        Lifecycle::new(utc_date(2024, 1, 1)),
        TourDto {
            title: Some(title.to_string()),
            status: Some(status),
            category: Some(category),
            price: Some(price),
            ..Default::default()
        },
    )
}

fn two_tours() -> RecordStore<Tour> {
    RecordStore::from_records(vec![
        tour("1", "Bali Adventure", TourStatus::Active, TourCategory::Adventure, 899),
        tour("2", "Japan Cultural Journey", TourStatus::Draft, TourCategory::Cultural, 2499),
    ])
    .unwrap()
}

fn ids<R: Record>(records: &[&R]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

fn seeded_tours() -> RecordStore<Tour> {
    RecordStore::from_records(seed_tours()).unwrap()
}

// ============================================================================
// Query Engine
// ============================================================================

#[test]
fn test_scenario_a_status_filter() {
    let store = two_tours();
    let query = ListQuery::<Tour> {
        status: FacetFilter::Only(TourStatus::Active),
        ..Default::default()
    };
    assert_eq!(ids(&apply_query(&store, &query)), vec!["1"]);
}

#[test]
fn test_scenario_b_search_ignores_case() {
    let store = two_tours();
    let query = ListQuery::<Tour> {
        search: "bali".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&apply_query(&store, &query)), vec!["1"]);
}

#[test]
fn test_search_is_sound_and_complete() {
    let store = seeded_tours();
    for term in ["a", "bali", "ISLAND", "days", "zzz", ""] {
        let query = ListQuery::<Tour> {
            search: term.to_string(),
            ..Default::default()
        };
        let result = apply_query(&store, &query);
        let needle = term.to_lowercase();
        let expected: Vec<&Tour> = store
            .iter()
            .filter(|t| {
                t.search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle))
            })
            .collect();
        assert_eq!(ids(&result), ids(&expected), "term {term:?}");
    }
}

#[test]
fn test_search_covers_tags() {
    let store = RecordStore::from_records(seed_gallery_items()).unwrap();
    let query = ListQuery::<GalleryItem> {
        search: "LANDSCAPE".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&apply_query(&store, &query)), vec!["1"]);
}

#[test]
fn test_all_facets_equal_search_only() {
    let store = seeded_tours();
    let search_only = ListQuery::<Tour> {
        search: "i".to_string(),
        ..Default::default()
    };
    let explicit_all = ListQuery::<Tour> {
        search: "i".to_string(),
        status: FacetFilter::All,
        category: FacetFilter::All,
        ..Default::default()
    };
    assert_eq!(
        ids(&apply_query(&store, &search_only)),
        ids(&apply_query(&store, &explicit_all))
    );
}

#[test]
fn test_concrete_facet_requires_equality() {
    let store = RecordStore::from_records(seed_gallery_items()).unwrap();
    for category in [GalleryCategory::Nature, GalleryCategory::Food] {
        let query = ListQuery::<GalleryItem> {
            category: FacetFilter::Only(category),
            ..Default::default()
        };
        let result = apply_query(&store, &query);
        assert!(result.iter().all(|item| item.category == category));
        assert_eq!(
            result.len(),
            store.count_where(|item| item.category == category)
        );
    }
}

#[test]
fn test_query_is_idempotent_and_pure() {
    let store = seeded_tours();
    let before = store.clone();
    let query = ListQuery::<Tour> {
        search: "a".to_string(),
        category: FacetFilter::Only(TourCategory::Adventure),
        sort: TourSort::Rating,
        ..Default::default()
    };
    let first = ids(&apply_query(&store, &query));
    let second = ids(&apply_query(&store, &query));
    assert_eq!(first, second);
    assert_eq!(store, before);
}

#[test]
fn test_default_sort_keeps_store_order() {
    let store = seeded_tours();
    let result = apply_query(&store, &ListQuery::<Tour>::default());
    assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn test_price_sorts_are_reverses() {
    let store = seeded_tours();
    let mut prices: Vec<u32> = store.iter().map(|t| t.price).collect();
    prices.sort_unstable();
    prices.dedup();
    assert_eq!(prices.len(), store.len(), "seed prices must be distinct");

    let asc = ListQuery::<Tour> {
        sort: TourSort::PriceLow,
        ..Default::default()
    };
    let desc = ListQuery::<Tour> {
        sort: TourSort::PriceHigh,
        ..Default::default()
    };
    let mut low_to_high = ids(&apply_query(&store, &asc));
    let high_to_low = ids(&apply_query(&store, &desc));
    low_to_high.reverse();
    assert_eq!(low_to_high, high_to_low);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let store = RecordStore::from_records(vec![
        tour("a", "First", TourStatus::Active, TourCategory::Adventure, 500),
        tour("b", "Second", TourStatus::Active, TourCategory::Adventure, 100),
        tour("c", "Third", TourStatus::Active, TourCategory::Adventure, 500),
    ])
    .unwrap();
    let query = ListQuery::<Tour> {
        sort: TourSort::PriceLow,
        ..Default::default()
    };
    assert_eq!(ids(&apply_query(&store, &query)), vec!["b", "a", "c"]);
}

#[test]
fn test_duration_sort() {
    let store = seeded_tours();
    let query = ListQuery::<Tour> {
        sort: TourSort::Duration,
        ..Default::default()
    };
    let days: Vec<u32> = apply_query(&store, &query)
        .iter()
        .filter_map(|t| t.duration_days())
        .collect();
    let mut sorted = days.clone();
    sorted.sort_unstable();
    assert_eq!(days, sorted);
}

// ============================================================================
// Record Store
// ============================================================================

#[test]
fn test_duplicate_seed_id_rejected() {
    let result = RecordStore::from_records(vec![
        tour("1", "A", TourStatus::Active, TourCategory::Adventure, 1),
        tour("1", "B", TourStatus::Active, TourCategory::Adventure, 2),
    ]);
    assert_eq!(
        result.unwrap_err(),
        StoreError::DuplicateId {
            id: RecordId::new("1")
        }
    );
}

#[test]
fn test_scenario_c_create_blog_post() {
    let mut store = RecordStore::<BlogPost>::new();
    let now = utc_date(2024, 4, 1);
    let id = store.create_at(
        BlogPostDto {
            title: Some("X".to_string()),
            ..Default::default()
        },
        now,
    );

    assert_eq!(store.len(), 1);
    let post = store.get(&id).unwrap();
    assert_eq!(post.status, BlogStatus::Draft);
    assert!(post.tags.is_empty());
    assert_eq!(post.lifecycle.published_at, None);
    assert_eq!(post.lifecycle.created_at, now);
    assert_eq!(post.lifecycle.updated_at, now);
    assert!(!id.as_str().is_empty());
    assert_eq!(store.revision(), 1);
}

#[test]
fn test_create_then_lookup_matches_template() {
    let mut store = seeded_tours();
    let template = TourDto {
        title: Some("Iceland Ring Road".to_string()),
        price: Some(1999),
        ..Default::default()
    };
    let now = utc_date(2024, 4, 1);
    let id = store.create_at(template.clone(), now);

    let expected = Tour::from_dto(id.clone(), Lifecycle::new(now), template);
    assert_eq!(store.get(&id), Some(&expected));
    assert_eq!(store.iter().last().map(|t| t.id.clone()), Some(id));
}

#[test]
fn test_create_published_sets_published_at() {
    let mut store = RecordStore::<BlogPost>::new();
    let now = utc_date(2024, 4, 1);
    let id = store.create_at(
        BlogPostDto {
            title: Some("Live".to_string()),
            status: Some(BlogStatus::Published),
            ..Default::default()
        },
        now,
    );
    assert_eq!(store.get(&id).unwrap().lifecycle.published_at, Some(now));
}

#[test]
fn test_publish_then_unpublish_policy() {
    let mut store = RecordStore::from_records(seed_blog_posts()).unwrap();
    let draft = RecordId::new("3");
    assert_eq!(store.get(&draft).unwrap().lifecycle.published_at, None);

    let publish_time = utc_date(2024, 4, 2);
    store
        .update_at(
            &draft,
            BlogPostDto {
                status: Some(BlogStatus::Published),
                ..Default::default()
            },
            publish_time,
        )
        .unwrap();
    assert_eq!(
        store.get(&draft).unwrap().lifecycle.published_at,
        Some(publish_time)
    );

    store
        .update_at(
            &draft,
            BlogPostDto {
                status: Some(BlogStatus::Draft),
                ..Default::default()
            },
            utc_date(2024, 4, 3),
        )
        .unwrap();
    assert_eq!(store.get(&draft).unwrap().lifecycle.published_at, None);
}

#[test]
fn test_update_keeps_identity_and_created_at() {
    let mut store = seeded_tours();
    let id = RecordId::new("2");
    let created = store.get(&id).unwrap().lifecycle.created_at;

    // Часы "отстают" от даты создания
    store
        .update_at(
            &id,
            TourDto {
                price: Some(100),
                ..Default::default()
            },
            utc_date(2000, 1, 1),
        )
        .unwrap();

    let updated = store.get(&id).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.price, 100);
    assert_eq!(updated.lifecycle.created_at, created);
    assert!(updated.lifecycle.updated_at >= updated.lifecycle.created_at);
}

#[test]
fn test_unknown_id_is_reported() {
    let mut store = seeded_tours();
    let missing = RecordId::new("404");
    let revision = store.revision();
    assert_eq!(
        store.update(&missing, TourDto::default()),
        Err(StoreError::NotFound {
            id: missing.clone()
        })
    );
    assert_eq!(
        store.delete(&missing),
        Err(StoreError::NotFound { id: missing })
    );
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut store = seeded_tours();
    let before = store.clone();
    let id = RecordId::new("3");

    let removed = store.delete(&id).unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(store.len(), before.len() - 1);
    assert!(!store.contains(&id));

    let untouched: Vec<&Tour> = before.iter().filter(|t| t.id != id).collect();
    let remaining: Vec<&Tour> = store.iter().collect();
    assert_eq!(remaining, untouched);
}

// ============================================================================
// Editor
// ============================================================================

#[test]
fn test_editor_create_and_discard() {
    let mut store = RecordStore::<Tour>::new();
    let mut editor = Editor::<Tour>::new();

    editor.open(None);
    assert_eq!(editor.mode(), Some(&EditorMode::Create));
    editor
        .stage(|dto| dto.title = Some("Draft tour".to_string()))
        .unwrap();
    editor.discard();
    assert!(!editor.is_open());
    assert!(store.is_empty());

    editor.open(None);
    editor
        .stage(|dto| dto.title = Some("Kept tour".to_string()))
        .unwrap();
    let id = editor.confirm(&mut store).unwrap();
    assert!(!editor.is_open());
    assert_eq!(store.get(&id).unwrap().title, "Kept tour");
    assert_eq!(store.get(&id).unwrap().status, TourStatus::Draft);
}

#[test]
fn test_editor_edit_does_not_touch_store_until_confirm() {
    let mut store = seeded_tours();
    let id = RecordId::new("1");
    let mut editor = Editor::<Tour>::new();

    editor.open(store.get(&id));
    assert_eq!(editor.mode(), Some(&EditorMode::Edit(id.clone())));
    editor.stage(|dto| dto.price = Some(1)).unwrap();
    assert_ne!(store.get(&id).unwrap().price, 1);

    assert_eq!(editor.confirm(&mut store).unwrap(), id);
    assert_eq!(store.get(&id).unwrap().price, 1);
}

#[test]
fn test_editor_confirm_on_deleted_record_clears_draft() {
    let mut store = seeded_tours();
    let id = RecordId::new("1");
    let mut editor = Editor::<Tour>::new();
    editor.open(store.get(&id));
    store.delete(&id).unwrap();

    let err = editor.confirm(&mut store).unwrap_err();
    assert_eq!(err, ListViewError::Store(StoreError::NotFound { id }));
    assert!(!editor.is_open());
}

#[test]
fn test_editor_closed() {
    let mut editor = Editor::<Tour>::new();
    let mut store = RecordStore::new();
    assert_eq!(editor.stage(|_| {}), Err(ListViewError::EditorClosed));
    assert_eq!(editor.confirm(&mut store), Err(ListViewError::EditorClosed));
}

#[test]
fn test_editor_tags() {
    let mut editor = Editor::<Tour>::new();
    editor.open(None);
    assert_eq!(editor.add_tag("  beach "), Ok(true));
    assert_eq!(editor.add_tag("beach"), Ok(false));
    assert_eq!(editor.add_tag("   "), Ok(false));
    assert_eq!(editor.add_tag("sunset"), Ok(true));
    editor.remove_tag("beach").unwrap();
    assert_eq!(
        editor.draft().and_then(|d| d.tags.clone()),
        Some(vec!["sunset".to_string()])
    );

    // У пользователей тегов нет
    let mut users = Editor::<User>::new();
    users.open(None);
    assert_eq!(users.add_tag("vip"), Ok(false));
    assert_eq!(users.draft(), Some(&User::template()));
}

#[test]
fn test_upload_resolved_at_confirm() {
    let mut controller = ListViewController::new(RecordStore::<GalleryItem>::new());
    controller.begin_create().unwrap();

    assert!(controller.stage_upload("dot.png", "image/png", b"abc".to_vec()));
    assert!(controller.editor().draft().unwrap().image.as_ref().unwrap().is_empty());

    let id = controller.confirm_editor().unwrap();
    let item = controller.store().get(&id).unwrap();
    assert_eq!(item.image.as_str(), "data:image/png;base64,YWJj");
    assert!(controller.editor().upload().is_none());
}

// ============================================================================
// List-View Controller
// ============================================================================

#[test]
fn test_controller_filters() {
    let mut controller = ListViewController::new(seeded_tours());
    assert!(!controller.has_active_filters());

    controller.set_search("island");
    controller.set_category_filter(FacetFilter::Only(TourCategory::Relaxation));
    assert!(controller.has_active_filters());
    assert!(controller
        .visible()
        .iter()
        .all(|t| t.category == TourCategory::Relaxation));

    controller.set_sort(TourSort::PriceHigh);
    controller.clear_filters();
    assert!(!controller.has_active_filters());
    assert_eq!(controller.visible().len(), 8);
    assert_eq!(controller.query().sort, TourSort::PriceHigh);
}

#[test]
fn test_controller_rejects_non_image_upload() {
    let mut controller = ListViewController::new(seeded_tours());
    controller.begin_edit(&RecordId::new("1")).unwrap();
    assert!(!controller.stage_upload("notes.pdf", "application/pdf", vec![1]));
    assert!(controller.notice().unwrap().contains("valid image"));
    assert!(controller.editor().upload().is_none());
    assert!(controller.editor().is_open());
}

#[test]
fn test_controller_delete_flow() {
    let mut controller = ListViewController::new(seeded_tours());
    let id = RecordId::new("5");

    controller.view(&id).unwrap();
    controller.request_delete(&id).unwrap();
    assert_eq!(controller.pending_delete().map(|t| t.id.clone()), Some(id.clone()));

    controller.cancel_delete();
    assert_eq!(controller.confirm_delete(), Err(ListViewError::NothingPending));
    assert_eq!(controller.store().len(), 8);

    controller.request_delete(&id).unwrap();
    controller.confirm_delete().unwrap();
    assert_eq!(controller.store().len(), 7);
    assert!(controller.viewing().is_none());
    assert!(controller.request_delete(&id).is_err());
}

#[test]
fn test_controller_busy_while_confirm_in_flight() {
    let mut controller = ListViewController::new(seeded_tours());
    controller.begin_edit(&RecordId::new("1")).unwrap();
    controller.stage(|dto| dto.featured = Some(false)).unwrap();
    let ticket = controller.begin_confirm().unwrap();

    assert_eq!(controller.begin_create(), Err(ListViewError::Busy));
    assert_eq!(
        controller.begin_edit(&RecordId::new("2")),
        Err(ListViewError::Busy)
    );

    controller.finish_confirm(ticket).unwrap();
    assert!(!controller.is_saving());
    assert!(!controller.store().get(&RecordId::new("1")).unwrap().featured);
    controller.begin_create().unwrap();
}

#[test]
fn test_discard_during_confirm_drops_late_result() {
    let mut controller = ListViewController::new(seeded_tours());
    controller.begin_create().unwrap();
    let ticket = controller.begin_confirm().unwrap();
    controller.discard_editor();

    assert_eq!(controller.finish_confirm(ticket), Err(ListViewError::EditorClosed));
    assert_eq!(controller.store().len(), 8);
}

#[test]
fn test_late_confirm_does_not_save_reopened_draft() {
    let mut controller = ListViewController::new(seeded_tours());
    controller.begin_create().unwrap();
    let ticket = controller.begin_confirm().unwrap();
    controller.discard_editor();

    controller.begin_create().unwrap();
    controller
        .stage(|dto| dto.title = Some("half typed".into()))
        .unwrap();

    assert_eq!(controller.finish_confirm(ticket), Err(ListViewError::EditorClosed));
    assert_eq!(controller.store().len(), 8);
    assert!(controller.editor().is_open());
    assert_eq!(
        controller.editor().draft().and_then(|d| d.title.as_deref()),
        Some("half typed")
    );
}

#[test]
fn test_finish_confirm_without_begin_is_rejected() {
    let mut controller = ListViewController::new(seeded_tours());
    controller.begin_create().unwrap();
    let ticket = controller.begin_confirm().unwrap();
    controller.finish_confirm(ticket).unwrap();

    controller.begin_create().unwrap();
    assert_eq!(controller.finish_confirm(ticket), Err(ListViewError::EditorClosed));
    assert_eq!(controller.store().len(), 9);
    assert!(controller.editor().is_open());
}

#[test]
fn test_view_unknown_id() {
    let mut controller = ListViewController::new(seeded_tours());
    let missing = RecordId::new("nope");
    assert!(matches!(
        controller.view(&missing),
        Err(ListViewError::Store(StoreError::NotFound { .. }))
    ));
    assert!(controller.begin_edit(&missing).is_err());
    assert!(!controller.editor().is_open());
}
