pub mod accept;
pub mod applicants;
pub mod applications;
pub mod apply;
pub mod auth;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod jobs;
pub mod log;
pub mod notifications;
pub mod post;

use crate::errors::{AppError, AppResult};

/// Parse a positional entity id argument.
pub(crate) fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_digits_rejects_garbage() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(AppError::InvalidId(_))));
    }
}
