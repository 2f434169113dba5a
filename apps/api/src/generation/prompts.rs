//! Prompt construction for résumé generation.

use crate::models::profile::UserProfile;

/// Builds the résumé-writer prompt from the profile. The section headers the
/// model is asked for are the same markers the assembler later extracts.
pub fn build_resume_prompt(profile: &UserProfile) -> String {
    let mut prompt = format!(
        "You are a professional resume writer.\n\
         Generate a polished resume for the following user:\n\n\
         Name: {}\n\
         Age: {}\n\
         Education: {}\n\
         Skills: {}\n\
         Experience: {}\n\n\
         Courses Completed:\n",
        profile.name,
        profile.age,
        profile.education,
        profile.skills.join(", "),
        profile.experience,
    );

    for course in &profile.courses {
        prompt.push_str(&format!(
            "- {} (Marks: {}, Completed: {})\n",
            course.course_name, course.marks, course.date
        ));
    }

    prompt.push_str(
        "\nStructure the resume with:\n\
         - Professional Summary\n\
         - Education\n\
         - Skills\n\
         - Work Experience\n\
         - Courses Completed\n\
         - Languages (if inferred)\n\
         - Keep it clear, friendly, and 1-page long.\n\
         Use **Professional Summary**, **Education** etc. as section headers.\n",
    );

    prompt
}
