pub mod aggregate;
pub mod config;
pub mod keywords;
pub mod logging;
pub mod session;
pub mod unsplash;

pub const TARGET_PHOTO_API: &str = "photo_api";
