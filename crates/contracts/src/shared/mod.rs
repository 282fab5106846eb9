pub mod config;
pub mod list_view;
pub mod validation;
