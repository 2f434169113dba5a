use serde::{Deserialize, Serialize};

/// A completed course as declared by the user.
/// `marks` and `date` are opaque display strings — no format is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_name: String,
    pub marks: String,
    pub date: String,
}

/// The session-scoped user profile. Created empty at session start and
/// updated either by manual entry or by the voice acquisition pipeline.
///
/// `skills` keeps insertion order for display; the matcher treats it as a set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub education: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub courses: Vec<Course>,
    pub profile_photo: Option<String>,
}

/// A partial profile update. Every field is optional; only fields present
/// overwrite the current value. Produced by manual PATCH requests and by the
/// extraction pipeline (whatever subset the transcript actually mentioned).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub courses: Option<Vec<Course>>,
    pub profile_photo: Option<String>,
}

/// Applies a patch to a profile, overwriting only the fields present in the
/// patch and returning a new value. Fields absent from the patch keep their
/// prior value; nothing is partially validated.
pub fn merge_profile(current: &UserProfile, patch: &ProfilePatch) -> UserProfile {
    UserProfile {
        name: patch.name.clone().unwrap_or_else(|| current.name.clone()),
        age: patch.age.unwrap_or(current.age),
        education: patch
            .education
            .clone()
            .unwrap_or_else(|| current.education.clone()),
        experience: patch
            .experience
            .clone()
            .unwrap_or_else(|| current.experience.clone()),
        skills: patch.skills.clone().unwrap_or_else(|| current.skills.clone()),
        courses: patch
            .courses
            .clone()
            .unwrap_or_else(|| current.courses.clone()),
        profile_photo: patch
            .profile_photo
            .clone()
            .or_else(|| current.profile_photo.clone()),
    }
}
