//! Job table loader. The table is read once at startup from a CSV file and
//! shared read-only for the life of the process.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::models::job::JobPosting;

const FALLBACK_UNKNOWN: &str = "Unknown";
const FALLBACK_NA: &str = "N/A";

/// Loads the job table from a CSV file. A missing or malformed file is fatal:
/// without the table every matching view is meaningless.
pub fn load_job_table(path: &Path) -> Result<Vec<JobPosting>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open job table CSV at {}", path.display()))?;
    parse_job_table(reader)
}

/// Parses job rows from any CSV reader. Optional columns fall back to fixed
/// literals; a missing or empty `Skill` cell yields an empty skill set for
/// that row (the matcher then excludes it naturally).
pub fn parse_job_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<JobPosting>> {
    let headers = reader
        .headers()
        .context("Job table CSV has no header row")?
        .clone();

    let mut jobs = Vec::new();
    for record in reader.records() {
        let record = record.context("Malformed row in job table CSV")?;
        jobs.push(row_to_posting(&headers, &record));
    }
    Ok(jobs)
}

fn row_to_posting(headers: &StringRecord, record: &StringRecord) -> JobPosting {
    let raw_skills = column(headers, record, "Skill").unwrap_or_default();
    JobPosting {
        job_title: column_or(headers, record, "Job Title", FALLBACK_UNKNOWN),
        company: column_or(headers, record, "Company", FALLBACK_UNKNOWN),
        platform: column_or(headers, record, "Platform", FALLBACK_NA),
        location: column_or(headers, record, "Location", FALLBACK_NA),
        salary_range: column_or(headers, record, "Salary Range", FALLBACK_NA),
        job_type: column_or(headers, record, "Job Type", FALLBACK_NA),
        required_skills: JobPosting::split_skills(&raw_skills),
    }
}

fn column(headers: &StringRecord, record: &StringRecord, name: &str) -> Option<String> {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|i| record.get(i))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn column_or(headers: &StringRecord, record: &StringRecord, name: &str, fallback: &str) -> String {
    column(headers, record, name).unwrap_or_else(|| fallback.to_string())
}
