use serde::Serialize;

/// Actor role, gating which commands a session may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Worker,
    Employer,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Worker => "Worker",
            Role::Employer => "Employer",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Worker" => Some(Role::Worker),
            "Employer" => Some(Role::Employer),
            _ => None,
        }
    }

    /// Helper: parse CLI input (case-insensitive, accepts the
    /// prototype's "jobseeker" alias for Worker)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "worker" | "jobseeker" => Some(Role::Worker),
            "employer" => Some(Role::Employer),
            _ => None,
        }
    }

    pub fn is_worker(&self) -> bool {
        matches!(self, Role::Worker)
    }

    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }
}
