use super::aggregate::{Difficulty, Tour, TourCategory, TourStatus};
use crate::domain::common::{utc_date, Lifecycle, MediaRef, RecordId};

#[allow(clippy::too_many_arguments)]
fn tour(
    id: &str,
    title: &str,
    description: &str,
    price: u32,
    duration: &str,
    location: &str,
    category: TourCategory,
    rating: f32,
    image: &str,
    status: TourStatus,
    featured: bool,
    max_participants: u32,
    difficulty: Difficulty,
    created: (u32, u32),
    updated: (u32, u32),
) -> Tour {
    Tour {
        id: RecordId::new(id),
        lifecycle: Lifecycle::at(
            utc_date(2024, created.0, created.1),
            utc_date(2024, updated.0, updated.1),
            None,
        ),
        title: title.to_string(),
        description: description.to_string(),
        price,
        duration: duration.to_string(),
        location: location.to_string(),
        category,
        rating,
        image: MediaRef::new(image),
        status,
        featured,
        max_participants,
        difficulty,
        tags: Vec::new(),
    }
}

/// Демо-каталог туров (общий для витрины и админки)
pub fn seed_tours() -> Vec<Tour> {
    vec![
        tour(
            "1",
            "Bali Adventure",
            "Explore the beautiful beaches and cultural heritage of Bali with our expert guides.",
            899,
            "7 days",
            "Bali, Indonesia",
            TourCategory::Adventure,
            4.8,
            "/Bali.jpg",
            TourStatus::Active,
            true,
            20,
            Difficulty::Medium,
            (1, 15),
            (3, 20),
        ),
        tour(
            "2",
            "European Grand Tour",
            "Visit the most iconic cities across Europe in this comprehensive 14-day journey.",
            2499,
            "14 days",
            "Multiple Countries",
            TourCategory::Cultural,
            4.9,
            "/MediterraneanCoast.jpg",
            TourStatus::Active,
            true,
            15,
            Difficulty::Easy,
            (2, 1),
            (3, 19),
        ),
        tour(
            "3",
            "Japan Cultural Experience",
            "Immerse yourself in Japanese culture, from ancient temples to modern cities.",
            1599,
            "10 days",
            "Japan",
            TourCategory::Cultural,
            4.7,
            "/Gallery03.jpg",
            TourStatus::Active,
            false,
            12,
            Difficulty::Easy,
            (1, 20),
            (3, 10),
        ),
        tour(
            "4",
            "African Safari",
            "Experience the wildlife and natural beauty of Africa on this unforgettable safari.",
            1899,
            "12 days",
            "Kenya, Tanzania",
            TourCategory::Adventure,
            4.9,
            "/African Saffari.jpg",
            TourStatus::Draft,
            false,
            8,
            Difficulty::Hard,
            (3, 15),
            (3, 18),
        ),
        tour(
            "5",
            "Caribbean Cruise",
            "Relax and unwind on a luxury cruise through the beautiful Caribbean islands.",
            1299,
            "8 days",
            "Caribbean",
            TourCategory::Relaxation,
            4.6,
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=500&h=300&fit=crop&auto=format&q=60",
            TourStatus::Active,
            false,
            30,
            Difficulty::Easy,
            (2, 10),
            (3, 1),
        ),
        tour(
            "6",
            "Himalayan Trek",
            "Challenge yourself with this incredible trek through the majestic Himalayas.",
            1199,
            "15 days",
            "Nepal",
            TourCategory::Adventure,
            4.8,
            "https://images.unsplash.com/photo-1509644851110-66e75b0c06af?w=500&h=300&fit=crop&auto=format&q=60",
            TourStatus::Active,
            false,
            10,
            Difficulty::Hard,
            (2, 12),
            (3, 5),
        ),
        tour(
            "7",
            "Mediterranean Coast",
            "Discover the stunning coastlines and historic cities of the Mediterranean.",
            1799,
            "11 days",
            "Greece, Italy",
            TourCategory::Cultural,
            4.7,
            "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=500&h=300&fit=crop&auto=format&q=60",
            TourStatus::Active,
            false,
            16,
            Difficulty::Easy,
            (2, 20),
            (3, 8),
        ),
        tour(
            "8",
            "Tropical Paradise",
            "Escape to pristine beaches and crystal-clear waters in this tropical getaway.",
            999,
            "6 days",
            "Maldives",
            TourCategory::Relaxation,
            4.5,
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=500&h=300&fit=crop&auto=format&q=60",
            TourStatus::Active,
            false,
            14,
            Difficulty::Easy,
            (3, 1),
            (3, 12),
        ),
    ]
}
