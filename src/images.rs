//! Image-name filtering.

use crate::storage::BlobEntry;

/// Recognized image-file extensions.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Returns true if the object name ends with a recognized image extension.
///
/// Case-insensitive suffix match only; object content is never inspected.
pub fn is_image_name(name: &str) -> bool {
    let name = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Reduces a container listing to image URLs, preserving listing order.
pub fn image_urls(entries: Vec<BlobEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| is_image_name(&entry.name))
        .map(|entry| entry.url.to_string())
        .collect()
}
