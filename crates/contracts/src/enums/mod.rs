pub mod badge_variant;

pub use badge_variant::BadgeVariant;
