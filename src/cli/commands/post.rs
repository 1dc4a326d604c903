use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::post::PostLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Post a new job as the current Employer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Post {
        title,
        category,
        pay,
        location,
    } = cmd
    {
        // Category falls back to the configured default when omitted.
        let category = category
            .clone()
            .unwrap_or_else(|| cfg.default_category.clone());

        let mut pool = DbPool::new(&cfg.database)?;

        PostLogic::apply(&mut pool, title, &category, pay, location)?;
    }

    Ok(())
}
