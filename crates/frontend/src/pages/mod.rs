//! Публичные страницы сайта

pub mod about;
pub mod blog;
mod cards;
pub mod catalogue;
pub mod contact;
mod form_binding;
pub mod gallery;
pub mod landing;
pub mod not_found;
pub mod packages;
pub mod payment;
pub mod tour_detail;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use packages::PackagesPage;
pub use payment::PaymentPage;
pub use tour_detail::TourDetailPage;
