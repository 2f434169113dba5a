use serde::{Deserialize, Serialize};

use crate::models::profile::Course;

/// The fixed-shape document model handed to the rendering collaborator.
/// Assembled once per generation request; the download endpoint renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    /// Normalized photo reference: a base64 data URI when the user supplied a
    /// readable image, otherwise a fixed placeholder URL.
    pub profile_photo: String,
    pub summary: String,
    pub education: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub courses: Vec<Course>,
    pub languages: Vec<String>,
}
