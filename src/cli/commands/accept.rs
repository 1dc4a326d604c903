use crate::cli::commands::parse_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accept::AcceptLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Accept an applicant as the current Employer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Accept { application_id } = cmd {
        let application_id = parse_id(application_id)?;

        let mut pool = DbPool::new(&cfg.database)?;

        AcceptLogic::apply(&mut pool, cfg, application_id)?;
    }

    Ok(())
}
