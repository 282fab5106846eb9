pub mod a001_user;
pub mod a002_tour;
pub mod a003_gallery_item;
pub mod a004_blog_post;
