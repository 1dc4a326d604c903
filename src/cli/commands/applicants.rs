use crate::cli::commands::parse_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_job, load_applications_by_job};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::RESET;
use crate::utils::formatting::{describe_status, time_ago};

/// List the applications received for one job.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Applicants { job_id } = cmd {
        let job_id = parse_id(job_id)?;

        let mut pool = DbPool::new(&cfg.database)?;

        let job = find_job(&pool.conn, job_id)?
            .ok_or_else(|| AppError::NotFound(format!("job {}", job_id)))?;

        let apps = load_applications_by_job(&pool.conn, job_id)?;

        if apps.is_empty() {
            println!("No applicants yet for \"{}\".", job.title);
            return Ok(());
        }

        println!("👤 Applicants for \"{}\" ({})\n", job.title, apps.len());
        for app in apps {
            let status = app.status.to_db_str();
            let (label, color) = describe_status(status);
            println!(
                "#{:<4} {} — {}{}{}: {} ({})",
                app.id,
                app.applicant,
                color,
                status,
                RESET,
                label,
                time_ago(&app.created_at),
            );
        }
    }
    Ok(())
}
