pub mod d100_admin;

pub use d100_admin::ui::AdminDashboard;
