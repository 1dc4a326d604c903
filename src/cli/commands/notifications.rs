use crate::config::Config;
use crate::core::auth::require_session;
use crate::db::pool::DbPool;
use crate::db::queries::load_notifications;
use crate::errors::AppResult;
use crate::utils::formatting::{bold, time_ago};

/// List notifications visible to the current session's role,
/// newest-first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let session = require_session(&pool.conn)?;
    let notifs = load_notifications(&pool.conn, session.role)?;

    if notifs.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    println!("🔔 Notifications ({})\n", notifs.len());

    for n in notifs {
        println!("• {} — {}", bold(&n.title), time_ago(&n.created_at));
        println!("  {}", n.message);
    }

    Ok(())
}
