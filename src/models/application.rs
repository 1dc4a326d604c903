use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(ApplicationStatus::Pending),
            "Accepted" => Some(ApplicationStatus::Accepted),
            "Rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }
}

/// A Worker's request to perform a Job.
///
/// At most one application may exist per (job_id, applicant) pair;
/// the store enforces this with a UNIQUE constraint and the apply
/// command surfaces the violation as a Conflict.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,               // ⇔ applications.job_id (→ jobs.id)
    pub applicant: String,         // ⇔ applications.applicant (session display name)
    pub status: ApplicationStatus, // ⇔ applications.status
    pub created_at: String,        // ⇔ applications.created_at (TEXT, ISO8601)
}

impl Application {
    /// Constructor for applications created by the `apply` command.
    /// - `id = 0` (assigned by SQLite on insert)
    /// - `status = Pending`
    pub fn new(job_id: i64, applicant: &str) -> Self {
        Self {
            id: 0,
            job_id,
            applicant: applicant.to_string(),
            status: ApplicationStatus::Pending,
            created_at: Local::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_application_is_pending() {
        let app = Application::new(7, "Bensoy Gon");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.job_id, 7);
    }

    #[test]
    fn status_db_round_trip() {
        for s in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::from_db_str(s.to_db_str()), Some(s));
        }
        assert_eq!(ApplicationStatus::from_db_str("pending"), None);
    }
}
