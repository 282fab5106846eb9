//! Common types and traits for all record kinds

pub mod choice;
pub mod error;
pub mod lifecycle;
pub mod media;
pub mod record;
pub mod record_id;

// Re-exports
pub use choice::{Choice, Facet, FacetFilter, SortKey};
pub use error::{ListViewError, MediaError, StoreError};
pub use lifecycle::{utc_date, Lifecycle};
pub use media::{MediaRef, MediaUpload};
pub use record::Record;
pub use record_id::RecordId;
