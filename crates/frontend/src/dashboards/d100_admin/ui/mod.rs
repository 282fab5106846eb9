mod dashboard;
mod overview;
mod section;
mod sidebar;

pub use dashboard::AdminDashboard;
pub use section::Section;
