use crate::config::Config;
use crate::core::auth::require_session;
use crate::db::pool::DbPool;
use crate::db::queries::load_applications_by_applicant;
use crate::errors::AppResult;
use crate::utils::colors::RESET;
use crate::utils::formatting::{describe_status, time_ago};

/// List the current session's applications joined with job details.
/// A missing job shows the "Job Unavailable" placeholder instead of
/// failing (graceful degradation).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let session = require_session(&pool.conn)?;
    let rows = load_applications_by_applicant(&pool.conn, &session.name)?;

    if rows.is_empty() {
        println!("No applications yet.");
        return Ok(());
    }

    println!("📤 My Applications ({})\n", rows.len());

    for row in rows {
        let status = row.application.status.to_db_str();
        let (label, color) = describe_status(status);

        println!(
            "#{:<4} {} — {}{}{}: {} ({})",
            row.application.id,
            row.job_title,
            color,
            status,
            RESET,
            label,
            time_ago(&row.application.created_at),
        );
        if !row.job_pay.is_empty() || !row.job_location.is_empty() {
            println!("      {} · {}", row.job_pay, row.job_location);
        }
    }

    Ok(())
}
