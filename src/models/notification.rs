use crate::models::role::Role;
use chrono::Local;
use serde::Serialize;

/// Which role(s) a notification is visible to at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Audience {
    Worker,
    Employer,
    Both,
}

impl Audience {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Audience::Worker => "Worker",
            Audience::Employer => "Employer",
            Audience::Both => "Both",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Worker" => Some(Audience::Worker),
            "Employer" => Some(Audience::Employer),
            "Both" => Some(Audience::Both),
            _ => None,
        }
    }

    /// Visibility filter: a notification reaches `role` when the
    /// audience matches it or is `Both`.
    pub fn reaches(&self, role: Role) -> bool {
        match self {
            Audience::Both => true,
            Audience::Worker => role == Role::Worker,
            Audience::Employer => role == Role::Employer,
        }
    }
}

/// Append-only event record targeted at a role audience.
/// Never mutated or deleted once written.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub audience: Audience,                  // ⇔ notifications.audience
    pub related_job_id: Option<i64>,         // ⇔ notifications.related_job_id
    pub related_application_id: Option<i64>, // ⇔ notifications.related_application_id
    pub created_at: String,                  // ⇔ notifications.created_at (ISO8601)
}

impl Notification {
    pub fn new(
        title: &str,
        message: &str,
        audience: Audience,
        related_job_id: Option<i64>,
        related_application_id: Option<i64>,
    ) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            message: message.to_string(),
            audience,
            related_job_id,
            related_application_id,
            created_at: Local::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_reaches_every_role() {
        assert!(Audience::Both.reaches(Role::Worker));
        assert!(Audience::Both.reaches(Role::Employer));
    }

    #[test]
    fn targeted_audience_filters_the_other_role() {
        assert!(Audience::Worker.reaches(Role::Worker));
        assert!(!Audience::Worker.reaches(Role::Employer));
        assert!(Audience::Employer.reaches(Role::Employer));
        assert!(!Audience::Employer.reaches(Role::Worker));
    }

    #[test]
    fn audience_db_round_trip() {
        for a in [Audience::Worker, Audience::Employer, Audience::Both] {
            assert_eq!(Audience::from_db_str(a.to_db_str()), Some(a));
        }
        assert_eq!(Audience::from_db_str("All"), None);
    }
}
