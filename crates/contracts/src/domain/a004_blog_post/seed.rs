use super::aggregate::{slugify, BlogCategory, BlogPost, BlogStatus};
use crate::domain::common::{utc_date, Lifecycle, MediaRef, RecordId};

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author: &str,
    category: BlogCategory,
    tags: &[&str],
    featured: bool,
    status: BlogStatus,
    created: (u32, u32),
    updated: (u32, u32),
    read_time: &str,
    image: &str,
) -> BlogPost {
    let published_at = status
        .eq(&BlogStatus::Published)
        .then(|| utc_date(2024, updated.0, updated.1));
    BlogPost {
        id: RecordId::new(id),
        lifecycle: Lifecycle::at(
            utc_date(2024, created.0, created.1),
            utc_date(2024, updated.0, updated.1),
            published_at,
        ),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured,
        status,
        read_time: read_time.to_string(),
        image: MediaRef::new(image),
        slug: slugify(title),
    }
}

/// Демо-посты блога
pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            "1",
            "10 Must-Visit Destinations in Southeast Asia",
            "Discover the most breathtaking and culturally rich destinations across Southeast Asia that every traveler should experience at least once in their lifetime.",
            "Southeast Asia is a treasure trove of incredible destinations...",
            "Sarah Johnson",
            BlogCategory::Destinations,
            &["southeast asia", "travel guide", "destinations"],
            true,
            BlogStatus::Published,
            (3, 10),
            (3, 15),
            "5 min read",
            "/Gallery06.jpg",
        ),
        post(
            "2",
            "Sustainable Travel: How to Explore Responsibly",
            "Learn about eco-friendly travel practices and how you can minimize your environmental impact while exploring the world.",
            "Sustainable travel is becoming increasingly important...",
            "Michael Chen",
            BlogCategory::Tips,
            &["sustainable travel", "eco-friendly", "tips"],
            false,
            BlogStatus::Published,
            (3, 8),
            (3, 12),
            "7 min read",
            "/Gallery07.jpg",
        ),
        post(
            "3",
            "Hidden Gems of Eastern Europe",
            "Explore the lesser-known but equally stunning destinations in Eastern Europe that offer authentic experiences without the crowds.",
            "Eastern Europe is full of hidden gems waiting to be discovered...",
            "Emma Wilson",
            BlogCategory::Destinations,
            &["eastern europe", "hidden gems", "off the beaten path"],
            false,
            BlogStatus::Draft,
            (3, 18),
            (3, 18),
            "6 min read",
            "/Gallery08.jpg",
        ),
        post(
            "4",
            "Photography Tips for Travelers",
            "Capture stunning travel memories with these professional photography tips and techniques.",
            "Great travel photography is about more than just having a good camera...",
            "David Kim",
            BlogCategory::Photography,
            &["photography", "travel tips", "camera"],
            true,
            BlogStatus::Published,
            (3, 15),
            (3, 20),
            "8 min read",
            "/Gallery09.jpg",
        ),
    ]
}
