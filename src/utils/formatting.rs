//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, Local};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Human "time ago" rendering for listing views.
/// Falls back to the raw string when the timestamp does not parse.
pub fn time_ago(created_at: &str) -> String {
    let Ok(ts) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };

    let mins = Local::now().signed_duration_since(ts).num_minutes();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} min ago", mins)
    } else if mins < 60 * 24 {
        format!("{} hr ago", mins / 60)
    } else {
        format!("{} days ago", mins / (60 * 24))
    }
}

/// Human phrase and ANSI color for an application status code,
/// used by the applications and applicants listings.
pub fn describe_status(code: &str) -> (String, &'static str) {
    let label = match code {
        "Pending" => "Waiting for response".to_string(),
        "Accepted" => "Hired".to_string(),
        "Rejected" => "Not selected".to_string(),
        other => other.to_string(),
    };
    (label, crate::utils::colors::color_for_application_status(code))
}
