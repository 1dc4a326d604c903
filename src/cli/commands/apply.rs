use crate::cli::commands::parse_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Apply to a job as the current Worker.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Apply { job_id } = cmd {
        let job_id = parse_id(job_id)?;

        let mut pool = DbPool::new(&cfg.database)?;

        ApplyLogic::apply(&mut pool, job_id)?;
    }

    Ok(())
}
