use serde::{Deserialize, Serialize};

/// Separator between skill tokens in the raw `Skill` column.
pub const SKILL_SEPARATOR: &str = ", ";

/// One row of the job table. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    pub company: String,
    pub platform: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: String,
    /// Skill tokens split from the raw delimited string. Empty when the
    /// source cell was missing or empty.
    pub required_skills: Vec<String>,
}

impl JobPosting {
    /// Splits a raw delimited skill string into tokens. Tokens are compared
    /// verbatim downstream — no trimming, case folding, or deduplication.
    pub fn split_skills(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(SKILL_SEPARATOR).map(str::to_string).collect()
    }
}

/// A job that shares at least one skill with the user. Transient — computed
/// fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    /// Shared skills, in the user's declared order.
    pub matching_skills: Vec<String>,
    /// Always >= 1; zero-count jobs are excluded entirely.
    pub match_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills_on_comma_space() {
        assert_eq!(
            JobPosting::split_skills("Tailoring, Stitching"),
            vec!["Tailoring".to_string(), "Stitching".to_string()]
        );
    }

    #[test]
    fn test_split_skills_empty_string_yields_empty_set() {
        assert!(JobPosting::split_skills("").is_empty());
    }

    #[test]
    fn test_split_skills_is_literal_not_trimming() {
        // A bare comma without the trailing space is not a separator.
        assert_eq!(
            JobPosting::split_skills("Tailoring,Stitching"),
            vec!["Tailoring,Stitching".to_string()]
        );
    }
}
