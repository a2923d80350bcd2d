//! Small derivations from TMDB fields: trailer links, image URLs and MIME types.

use super::models::Video;
use std::path::Path;

const TRAILER: &str = "trailer";

/// YouTube link for the first trailer in `videos`, if any
pub fn trailer_url(videos: &[Video], base_youtube_path: &str) -> Option<String> {
    videos
        .iter()
        .find(|video| video.r#type.trim().eq_ignore_ascii_case(TRAILER) && !video.key.is_empty())
        .map(|video| format!("{}{}", base_youtube_path, video.key))
}

/// `image/<ext>` for an image path, or an empty string when the path has no extension
pub fn image_type(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("image/{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Join base, size and path with exactly one `/` between each part
pub fn image_url(base_image_path: &str, size: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base_image_path.trim_end_matches('/'),
        size.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Profile image for a cast or crew entry, falling back to the default image
pub fn cast_image_url(
    profile_path: Option<&str>,
    base_image_path: &str,
    size: &str,
    default_image: &str,
) -> String {
    match profile_path.map(str::trim) {
        Some(path) if !path.is_empty() => image_url(base_image_path, size, path),
        _ => default_image.to_string(),
    }
}
