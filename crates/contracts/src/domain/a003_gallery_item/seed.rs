use super::aggregate::{GalleryCategory, GalleryItem, GalleryStatus};
use crate::domain::common::{utc_date, Lifecycle, MediaRef, RecordId};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    category: GalleryCategory,
    tags: &[&str],
    featured: bool,
    status: GalleryStatus,
    uploaded: (u32, u32),
    alt: &str,
) -> GalleryItem {
    let uploaded = utc_date(2024, uploaded.0, uploaded.1);
    GalleryItem {
        id: RecordId::new(id),
        lifecycle: Lifecycle::at(uploaded, uploaded, None),
        title: title.to_string(),
        description: description.to_string(),
        image: MediaRef::new(image),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured,
        status,
        uploaded_by: "Admin".to_string(),
        alt: alt.to_string(),
    }
}

/// Демо-изображения галереи
pub fn seed_gallery_items() -> Vec<GalleryItem> {
    use GalleryCategory::*;
    use GalleryStatus::*;

    vec![
        item("1", "Mountain Sunrise", "Beautiful sunrise over the mountain peaks", "/Gallery01.jpg", Nature, &["mountain", "sunrise", "landscape"], true, Active, (1, 15), "Mountain sunrise landscape"),
        item("2", "Tropical Beach", "Crystal clear waters and white sand beach", "/TropicalParadise.jpg", Beach, &["beach", "tropical", "ocean"], true, Active, (2, 1), "Tropical beach paradise"),
        item("3", "Ancient Temple", "Historic temple architecture in Southeast Asia", "/Our Vision.jpg", Culture, &["temple", "architecture", "history"], false, Active, (2, 15), "Ancient temple architecture"),
        item("4", "Desert Dunes", "Golden sand dunes in the desert", "/Gallery05.jpg", Adventure, &["desert", "dunes", "adventure"], false, Inactive, (3, 10), "Desert sand dunes"),
        item("5", "Lake Serenity", "Serene lake view at dawn", "/Bali.jpg", Nature, &["lake", "calm"], false, Active, (3, 11), "Serene lake view"),
        item("6", "Urban Sunset", "City skyline at sunset", "/Gallery03.jpg", Urban, &["city", "skyline", "sunset"], false, Active, (3, 12), "City skyline at sunset"),
        item("7", "Jungle Waterfall", "Waterfall hidden in the jungle", "/Gallery06.jpg", Nature, &["waterfall", "jungle"], false, Active, (3, 13), "Waterfall in the jungle"),
        item("8", "Northern Lights", "Aurora borealis over the fjords", "/Gallery04.jpg", Nature, &["aurora", "night"], true, Active, (3, 14), "Aurora borealis"),
        item("9", "Historic Castle", "A castle overlooking the old town", "/Gallery07.jpg", Culture, &["castle", "history"], false, Active, (3, 15), "Historic castle"),
        item("10", "Rocky Shore", "Waves breaking on a rocky beach", "/Gallery08.jpg", Beach, &["coast", "waves"], false, Active, (3, 16), "Rocky beach"),
    ]
}
