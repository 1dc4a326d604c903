use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use crate::db::queries::insert_notification;
use crate::models::notification::{Audience, Notification};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
///  - the welcome notification shown to every role
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing gigboard…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;

    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Seed the board's welcome notification exactly once.
    let already_seeded: bool = conn
        .prepare("SELECT 1 FROM notifications WHERE title = 'Welcome!' LIMIT 1")?
        .exists([])?;
    if !already_seeded {
        insert_notification(
            &conn,
            &Notification::new(
                "Welcome!",
                "Welcome to gigboard!",
                Audience::Both,
                None,
                None,
            ),
        )?;
    }

    // Internal log (non-blocking)
    if let Err(e) = log::oplog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 gigboard initialization completed!");
    Ok(())
}
