//! Database information for the `db --info` subcommand.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};
use std::fs;

fn count_rows(pool: &DbPool, table: &str) -> AppResult<i64> {
    // Table names come from the fixed list below, never from user input.
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let n: i64 = pool.conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(n)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let sqlite_version: String = pool
        .conn
        .query_row("SELECT sqlite_version();", [], |row| row.get(0))?;

    let size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!("{}🗄  Database info{}", CYAN, RESET);
    println!("  Path:           {}", db_path);
    println!("  SQLite version: {}", sqlite_version);
    println!("  File size:      {} bytes", size);
    println!();

    for table in ["jobs", "applications", "notifications", "session", "log"] {
        println!("  {:<14} {:>6} rows", table, count_rows(pool, table)?);
    }
    println!();

    Ok(())
}
