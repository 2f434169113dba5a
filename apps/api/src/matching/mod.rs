//! Skill Matcher — pure set-intersection ranking of jobs against the user's
//! declared skills. No side effects, no caching: identical inputs always
//! produce an identical ordered result.

pub mod handlers;

use std::collections::{BTreeMap, HashSet};

use crate::models::job::{JobPosting, MatchResult};

/// Ranks jobs by the number of skills they share with the user.
///
/// - Matching is exact-token and case-sensitive — no normalization.
/// - The intersection is over distinct tokens: a skill declared twice still
///   counts once.
/// - Jobs with an empty intersection are excluded, not low-ranked.
/// - The sort is stable: jobs with equal match counts keep their relative
///   order from the input table.
/// - The full ranked sequence is returned; truncation is the caller's job.
pub fn match_jobs(user_skills: &[String], jobs: &[JobPosting]) -> Vec<MatchResult> {
    // Dedupe the declared list up front, keeping first-declaration order so
    // matching_skills has a deterministic display order.
    let mut seen = HashSet::new();
    let distinct_skills: Vec<&str> = user_skills
        .iter()
        .map(String::as_str)
        .filter(|skill| seen.insert(*skill))
        .collect();

    let mut results: Vec<MatchResult> = jobs
        .iter()
        .filter_map(|job| {
            let required: HashSet<&str> =
                job.required_skills.iter().map(String::as_str).collect();
            let matching: Vec<String> = distinct_skills
                .iter()
                .copied()
                .filter(|skill| required.contains(skill))
                .map(str::to_string)
                .collect();
            if matching.is_empty() {
                None
            } else {
                let match_count = matching.len();
                Some(MatchResult {
                    job: job.clone(),
                    matching_skills: matching,
                    match_count,
                })
            }
        })
        .collect();

    // sort_by is stable, which is what keeps ties in input-table order.
    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    results
}

/// Per-skill occurrence counts across all surviving matches — the dataset
/// behind the pie chart. BTreeMap keeps the output order deterministic.
pub fn skill_match_counts(results: &[MatchResult]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for result in results {
        for skill in &result.matching_skills {
            *counts.entry(skill.clone()).or_insert(0) += 1;
        }
    }
    counts
}
