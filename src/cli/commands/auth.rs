use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;

/// Start a session: `login --name NAME --role worker|employer`.
pub fn handle_login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { name, role } = cmd {
        let role = Role::from_code(role).ok_or_else(|| {
            AppError::InvalidRole(format!(
                "'{}'. Use 'worker' (alias: jobseeker) or 'employer'.",
                role
            ))
        })?;

        let mut pool = DbPool::new(&cfg.database)?;
        AuthLogic::login(&mut pool, name, role)?;
    }
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    AuthLogic::logout(&mut pool)
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    AuthLogic::whoami(&mut pool)
}
