use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_session, current_session, replace_session};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Load the active session or fail with an Authorization error.
pub fn require_session(conn: &Connection) -> AppResult<Session> {
    current_session(conn)?
        .ok_or_else(|| AppError::Authorization("no active session, log in first".into()))
}

/// Load the active session and check its role gates the operation.
pub fn require_role(conn: &Connection, role: Role, verb: &str) -> AppResult<Session> {
    let session = require_session(conn)?;
    if session.role != role {
        return Err(AppError::Authorization(format!(
            "only {}s can {} (you are logged in as {})",
            role.to_db_str(),
            verb,
            session.role.to_db_str(),
        )));
    }
    Ok(session)
}

/// High-level business logic for `login`, `logout` and `whoami`.
pub struct AuthLogic;

impl AuthLogic {
    /// Start a session for `name` acting as `role`.
    ///
    /// Replaces any previous session (single-actor model). There is no
    /// credential check in scope; `verified` is set by the constructor.
    pub fn login(pool: &mut DbPool, name: &str, role: Role) -> AppResult<Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("display name must not be empty".into()));
        }

        let session = Session::new(name, role);
        replace_session(&pool.conn, &session)?;

        oplog(
            &pool.conn,
            "login",
            name,
            &format!("Logged in as {} ({})", name, role.to_db_str()),
        )?;

        success(format!("Logged in as {} ({}).", name, role.to_db_str()));
        Ok(session)
    }

    pub fn logout(pool: &mut DbPool) -> AppResult<()> {
        match current_session(&pool.conn)? {
            Some(session) => {
                clear_session(&pool.conn)?;
                oplog(
                    &pool.conn,
                    "logout",
                    &session.name,
                    &format!("Logged out {}", session.name),
                )?;
                success(format!("Logged out {}.", session.name));
            }
            None => info("No active session."),
        }
        Ok(())
    }

    pub fn whoami(pool: &mut DbPool) -> AppResult<()> {
        match current_session(&pool.conn)? {
            Some(s) => println!(
                "{} ({}){}",
                s.name,
                s.role.to_db_str(),
                if s.verified { " ✔ verified" } else { "" }
            ),
            None => info("No active session."),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn test_pool() -> DbPool {
        let conn = Connection::open_in_memory().expect("in-memory db");
        init_db(&conn).expect("init");
        DbPool { conn }
    }

    #[test]
    fn require_session_without_login_is_authorization_error() {
        let pool = test_pool();
        assert!(matches!(
            require_session(&pool.conn),
            Err(AppError::Authorization(_))
        ));
    }

    #[test]
    fn require_role_rejects_the_other_role() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Walter Black", Role::Employer).unwrap();

        assert!(require_role(&pool.conn, Role::Employer, "post jobs").is_ok());
        assert!(matches!(
            require_role(&pool.conn, Role::Worker, "apply to jobs"),
            Err(AppError::Authorization(_))
        ));
    }

    #[test]
    fn login_rejects_blank_names() {
        let mut pool = test_pool();
        assert!(matches!(
            AuthLogic::login(&mut pool, "  ", Role::Worker),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn relogin_replaces_session() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Walter Black", Role::Employer).unwrap();
        AuthLogic::login(&mut pool, "Bensoy Gon", Role::Worker).unwrap();

        let s = require_session(&pool.conn).unwrap();
        assert_eq!(s.name, "Bensoy Gon");
        assert!(s.role.is_worker());
    }
}
