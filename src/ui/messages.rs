//! Colored one-line status output for command results.
//!
//! Success lines confirm a board mutation ("Posted ...", "Hired ...");
//! info lines carry neutral state ("No active session."); warnings and
//! errors are reserved for maintenance paths (migrations, backups).

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, "⚠️", msg));
}

/// Goes to stderr so piped stdout stays machine-readable.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, "❌", msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_wraps_message_with_color_and_reset() {
        let out = line(GREEN, "✅", "Posted \"Fix sink\".");
        assert!(out.starts_with(GREEN));
        assert!(out.contains(RESET));
        assert!(out.ends_with("Posted \"Fix sink\"."));
    }

    #[test]
    fn line_accepts_any_display_value() {
        let out = line(BLUE, "ℹ️", 42);
        assert!(out.contains("42"));
    }
}
