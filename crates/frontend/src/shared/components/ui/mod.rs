pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, FacetBadge};
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::{choice_options, facet_filter_options, Select};
pub use textarea::Textarea;
