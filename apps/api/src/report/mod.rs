//! Report / analytics presenter — formats matcher output into the datasets
//! behind the two charts (pie of skill-match counts, bar of top jobs) plus
//! the per-job report entries and the career recommendation. Chart drawing
//! itself belongs to the client.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::{match_jobs, skill_match_counts};
use crate::models::job::JobPosting;

/// How many jobs the report and the bar chart show.
pub const TOP_JOBS: usize = 5;

/// Informational empty state — zero matches is not an error.
pub const EMPTY_STATE_MESSAGE: &str =
    "No matching jobs found. Consider adding more skills or courses.";

/// One pie-chart slice: a skill and how many matched jobs require it.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSlice {
    pub skill: String,
    pub count: u32,
}

/// One bar-chart bar: a top job labelled "title (company)".
#[derive(Debug, Clone, Serialize)]
pub struct JobBar {
    pub label: String,
    pub match_count: usize,
}

/// One per-job report entry, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub job_title: String,
    pub company: String,
    pub platform: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: String,
    pub matching_skills: Vec<String>,
    pub match_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub pie: Vec<SkillSlice>,
    pub bar: Vec<JobBar>,
    pub entries: Vec<ReportEntry>,
    pub recommendation: String,
    pub generated_at: DateTime<Utc>,
}

/// Builds the full report from the current skills and the job table.
/// Computed fresh per request — nothing is cached.
pub fn build_report(user_skills: &[String], jobs: &[JobPosting]) -> MatchReport {
    let results = match_jobs(user_skills, jobs);
    let counts = skill_match_counts(&results);

    let pie = counts
        .iter()
        .map(|(skill, count)| SkillSlice {
            skill: skill.clone(),
            count: *count,
        })
        .collect();

    let bar = results
        .iter()
        .take(TOP_JOBS)
        .map(|m| JobBar {
            label: format!("{} ({})", m.job.job_title, m.job.company),
            match_count: m.match_count,
        })
        .collect();

    let entries = results
        .iter()
        .take(TOP_JOBS)
        .map(|m| ReportEntry {
            job_title: m.job.job_title.clone(),
            company: m.job.company.clone(),
            platform: m.job.platform.clone(),
            location: m.job.location.clone(),
            salary_range: m.job.salary_range.clone(),
            job_type: m.job.job_type.clone(),
            matching_skills: m.matching_skills.clone(),
            match_count: m.match_count,
        })
        .collect();

    let recommendation = match results.first() {
        Some(top) => {
            let strongest: Vec<&str> = counts.keys().map(String::as_str).collect();
            format!(
                "Based on your strongest skills like {}, we recommend applying for the {} role at {}.",
                strongest.join(", "),
                top.job.job_title,
                top.job.company
            )
        }
        None => EMPTY_STATE_MESSAGE.to_string(),
    };

    MatchReport {
        pie,
        bar,
        entries,
        recommendation,
        generated_at: Utc::now(),
    }
}
