// src/export/model.rs

use crate::db::queries::ApplicationWithJob;
use crate::models::job::Job;
use serde::Serialize;

/// Flat record for job export.
#[derive(Serialize, Clone, Debug)]
pub struct JobExport {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub pay: String,
    pub posted_by: String,
    pub location: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Job> for JobExport {
    fn from(j: &Job) -> Self {
        Self {
            id: j.id,
            title: j.title.clone(),
            category: j.category.clone(),
            pay: j.pay.clone(),
            posted_by: j.posted_by.clone(),
            location: j.location.clone(),
            status: j.status.to_db_str().to_string(),
            created_at: j.created_at.clone(),
        }
    }
}

/// Flat record for application export, with the joined job title.
#[derive(Serialize, Clone, Debug)]
pub struct ApplicationExport {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub applicant: String,
    pub status: String,
    pub created_at: String,
}

impl From<&ApplicationWithJob> for ApplicationExport {
    fn from(row: &ApplicationWithJob) -> Self {
        Self {
            id: row.application.id,
            job_id: row.application.job_id,
            job_title: row.job_title.clone(),
            applicant: row.application.applicant.clone(),
            status: row.application.status.to_db_str().to_string(),
            created_at: row.application.created_at.clone(),
        }
    }
}

/// Headers for CSV job export.
pub(crate) fn job_headers() -> Vec<&'static str> {
    vec![
        "id",
        "title",
        "category",
        "pay",
        "posted_by",
        "location",
        "status",
        "created_at",
    ]
}

/// Headers for CSV application export.
pub(crate) fn application_headers() -> Vec<&'static str> {
    vec!["id", "job_id", "job_title", "applicant", "status", "created_at"]
}
