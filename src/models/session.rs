use crate::models::role::Role;
use chrono::Local;
use serde::Serialize;

/// The current authenticated actor: one active session at a time.
///
/// `verified` is set unconditionally at login. Real identity-proof
/// review is out of scope here; the flag is carried so the schema
/// does not change when it arrives.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub name: String,       // ⇔ session.name (actor display name)
    pub role: Role,         // ⇔ session.role ('Worker'|'Employer')
    pub verified: bool,     // ⇔ session.verified (INT 0/1)
    pub created_at: String, // ⇔ session.created_at (TEXT, ISO8601)
}

impl Session {
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            role,
            verified: true,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
