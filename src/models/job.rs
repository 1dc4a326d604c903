use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::Serialize;

/// Lifecycle of a posting. The `status` column is the only mutable
/// field of a job once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    Open,
    Filled,
    Closed,
}

impl JobStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Filled => "Filled",
            JobStatus::Closed => "Closed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Open" => Some(JobStatus::Open),
            "Filled" => Some(JobStatus::Filled),
            "Closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Open)
    }
}

/// A posted gig: title + category + pay + location, created by an
/// Employer session.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub title: String,        // ⇔ jobs.title (TEXT NOT NULL)
    pub category: String,     // ⇔ jobs.category (open string set)
    pub pay: String,          // ⇔ jobs.pay (free-text rate, e.g. "₱500")
    pub posted_by: String,    // ⇔ jobs.posted_by (session display name)
    pub location: String,     // ⇔ jobs.location
    pub status: JobStatus,    // ⇔ jobs.status ('Open'|'Filled'|'Closed')
    pub created_at: String,   // ⇔ jobs.created_at (TEXT, ISO8601)
}

impl Job {
    /// Constructor for jobs created by the `post` command.
    /// Rejects empty required fields up front so no partial record
    /// ever reaches the store.
    /// - `id = 0` (assigned by SQLite on insert)
    /// - `status = Open`
    /// - `created_at = now() in ISO8601`
    pub fn new(
        title: &str,
        category: &str,
        pay: &str,
        location: &str,
        posted_by: &str,
    ) -> AppResult<Self> {
        let title = title.trim();
        let category = category.trim();
        let pay = pay.trim();
        let location = location.trim();

        if title.is_empty() {
            return Err(AppError::Validation("job title must not be empty".into()));
        }
        if category.is_empty() {
            return Err(AppError::Validation("job category must not be empty".into()));
        }
        if pay.is_empty() {
            return Err(AppError::Validation("job pay must not be empty".into()));
        }
        if location.is_empty() {
            return Err(AppError::Validation("job location must not be empty".into()));
        }

        Ok(Self {
            id: 0,
            title: title.to_string(),
            category: category.to_string(),
            pay: pay.to_string(),
            posted_by: posted_by.to_string(),
            location: location.to_string(),
            status: JobStatus::Open,
            created_at: Local::now().to_rfc3339(),
        })
    }
}
