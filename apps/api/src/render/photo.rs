//! Profile photo normalization. A supplied file path is re-encoded to a
//! base64 data URI so clients never need filesystem access; anything else
//! falls back to a fixed placeholder image.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

/// Shown whenever the user has no usable photo.
pub const PLACEHOLDER_PHOTO: &str = "https://cdn-icons-png.flaticon.com/512/2922/2922510.png";

/// Normalizes an optional photo reference. Absent, unreadable, or empty
/// references yield the placeholder — never an error.
pub fn normalize_photo(photo_path: Option<&str>) -> String {
    let Some(path) = photo_path.filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_PHOTO.to_string();
    };
    match std::fs::read(Path::new(path)) {
        Ok(bytes) => format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)),
        Err(_) => PLACEHOLDER_PHOTO.to_string(),
    }
}
