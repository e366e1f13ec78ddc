use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Fallback images for records stored without thumbnail/preview URLs.
pub const PLACEHOLDER_THUMBNAIL_URL: &str = "https://placehold.co/600x400.png";
pub const PLACEHOLDER_PREVIEW_URL: &str = "https://placehold.co/1200x800.png";

/// Cached public views that list or reference projects. Every successful
/// write invalidates all of them (coarse, path-based).
pub const PUBLIC_PROJECT_PATHS: [&str; 3] = ["/", "/projects", "/favorites"];
