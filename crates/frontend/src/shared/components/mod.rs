pub mod page_header;
pub mod search_input;
pub mod stat_card;
pub mod ui;

pub use page_header::PageHeader;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
