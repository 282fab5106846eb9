pub mod components;
pub mod date_utils;
pub mod icons;
pub mod latency;
pub mod list_view;
pub mod modal;
