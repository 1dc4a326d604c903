use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportSubject;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        applications,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *applications {
            // Exporting "my applications" needs to know who "my" is.
            let session = require_session(&pool.conn)?;
            let applicant = session.name.clone();
            ExportLogic::export(
                &mut pool,
                format,
                file,
                ExportSubject::Applications {
                    applicant: &applicant,
                },
                *force,
            )?;
        } else {
            ExportLogic::export(&mut pool, format, file, ExportSubject::Jobs, *force)?;
        }
    }
    Ok(())
}
