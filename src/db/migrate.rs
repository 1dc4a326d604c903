use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists in the connected database.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `notifications` table carries the traceability columns.
fn notifications_have_related_columns(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('notifications')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "related_job_id" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the core entity tables with the modern schema.
fn create_entity_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL,
            category   TEXT NOT NULL,
            pay        TEXT NOT NULL,
            posted_by  TEXT NOT NULL,
            location   TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Open' CHECK(status IN ('Open','Filled','Closed')),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS applications (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id     INTEGER NOT NULL REFERENCES jobs(id),
            applicant  TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Pending' CHECK(status IN ('Pending','Accepted','Rejected')),
            created_at TEXT NOT NULL,
            UNIQUE(job_id, applicant)
        );

        CREATE TABLE IF NOT EXISTS notifications (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            title                  TEXT NOT NULL,
            message                TEXT NOT NULL,
            audience               TEXT NOT NULL CHECK(audience IN ('Worker','Employer','Both')),
            related_job_id         INTEGER,
            related_application_id INTEGER,
            created_at             TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS session (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            role       TEXT NOT NULL CHECK(role IN ('Worker','Employer')),
            verified   INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_jobs_status ON jobs(status);
        CREATE INDEX IF NOT EXISTS idx_applications_job ON applications(job_id);
        CREATE INDEX IF NOT EXISTS idx_applications_applicant ON applications(applicant);
        CREATE INDEX IF NOT EXISTS idx_notifications_audience ON notifications(audience);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `notifications` table to include the
/// traceability columns, recorded as a versioned migration in `log`.
fn migrate_add_notification_relations(conn: &Connection) -> Result<(), Error> {
    let version = "20260215_0007_add_notification_relations";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if notifications_have_related_columns(conn)? {
        // Fresh schema already has the columns; just mark the version.
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Notification relations present')",
            [version],
        )?;
        return Ok(());
    }

    // 2) Apply
    conn.execute_batch(
        r#"
        ALTER TABLE notifications ADD COLUMN related_job_id INTEGER;
        ALTER TABLE notifications ADD COLUMN related_application_id INTEGER;
        "#,
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add notification relation columns: {}", e)),
        )
    })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added related ids to notifications')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added related ids to notifications table",
        version
    ));

    Ok(())
}

/// Drop obsolete tables left behind by the 0.2 schema.
fn align_db_schemas_to_030_version(conn: &Connection) -> Result<()> {
    if table_exists(conn, "gigs")? {
        conn.execute_batch("DROP TABLE gigs;")?;
        success("Dropped obsolete gigs table.");
    }

    Ok(())
}

fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_030.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."))
        .join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            e.kind(),
            format!("Backup failed (create): {}", e),
        )))
    })?;

    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (start_file): {}",
            e
        ))))
    })?;

    let db_content = fs::read(db_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (read): {}",
            e
        ))))
    })?;

    zip.write_all(&db_content).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (write_all): {}",
            e
        ))))
    })?;

    zip.finish().map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (finish): {}",
            e
        ))))
    })?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Inspect current schema
    let notifications_exist = table_exists(conn, "notifications")?;
    let notifications_modern = if notifications_exist {
        notifications_have_related_columns(conn)?
    } else {
        false
    };

    // 3) Detect legacy schema (< 0.3.0)
    let gigs_table_exists = table_exists(conn, "gigs")?;

    let is_legacy_schema = gigs_table_exists || (notifications_exist && !notifications_modern);

    // 4) If legacy → perform PRE-MIGRATION BACKUP
    if is_legacy_schema {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }
    }

    // 5) Create/upgrade entity tables
    create_entity_tables(conn)?;
    migrate_add_notification_relations(conn)?;

    // 6) Perform schema cleanup for 0.3.0+
    align_db_schemas_to_030_version(conn)?;

    Ok(())
}
