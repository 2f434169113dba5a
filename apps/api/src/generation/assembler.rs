//! Résumé Assembler — turns the profile plus the generated narrative into the
//! fixed-shape document model handed to the rendering collaborator.

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::resume::ResumeDocument;
use crate::render::photo::normalize_photo;

/// Marker opening the summary section in the generated narrative.
pub const SUMMARY_OPEN: &str = "**Professional Summary**";
/// Marker closing the summary section (the next section header).
pub const SUMMARY_CLOSE: &str = "**Education**";

/// Substituted verbatim when the narrative lacks the summary markers.
/// An unexpected narrative shape is silently masked, never an error.
pub const FALLBACK_SUMMARY: &str =
    "A hardworking and aspiring candidate with a strong will to learn and grow.";

/// Default language list when the profile supplies none.
pub const DEFAULT_LANGUAGES: [&str; 2] = ["Hindi", "English"];

/// Extracts the summary: the text between the last `SUMMARY_OPEN` and the
/// following `SUMMARY_CLOSE`, trimmed. Missing close marker takes the rest of
/// the narrative; missing open marker yields the fallback sentence.
pub fn extract_summary(narrative: &str) -> String {
    match narrative.rfind(SUMMARY_OPEN) {
        Some(idx) => {
            let after = &narrative[idx + SUMMARY_OPEN.len()..];
            let end = after.find(SUMMARY_CLOSE).unwrap_or(after.len());
            after[..end].trim().to_string()
        }
        None => FALLBACK_SUMMARY.to_string(),
    }
}

/// Assembles the document model from the profile and the generated narrative.
/// The only validation is the presence of a name; everything else passes
/// through as-is.
pub fn assemble(profile: &UserProfile, narrative: &str) -> Result<ResumeDocument, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Profile name is required before a resume can be generated".to_string(),
        ));
    }

    Ok(ResumeDocument {
        name: profile.name.clone(),
        profile_photo: normalize_photo(profile.profile_photo.as_deref()),
        summary: extract_summary(narrative),
        education: profile.education.clone(),
        skills: profile.skills.clone(),
        experience: profile.experience.clone(),
        courses: profile.courses.clone(),
        languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
    })
}
