use crate::errors::{AppError, AppResult};
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{Job, JobStatus};
use crate::models::notification::{Audience, Notification};
use crate::models::role::Role;
use crate::models::session::Session;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

/// Placeholder title rendered when an application references a job
/// that no longer exists. Graceful degradation, never a hard failure.
pub const JOB_UNAVAILABLE: &str = "Job Unavailable";

fn conversion_err(detail: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(detail))
}

// ---------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------

pub fn map_job_row(row: &Row) -> Result<Job> {
    let status_str: String = row.get("status")?;
    let status = JobStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_err(AppError::Other(format!("Invalid job status: {}", status_str))))?;

    Ok(Job {
        id: row.get("id")?,
        title: row.get("title")?,
        category: row.get("category")?,
        pay: row.get("pay")?,
        posted_by: row.get("posted_by")?,
        location: row.get("location")?,
        status,
        created_at: row.get("created_at")?,
    })
}

pub fn map_application_row(row: &Row) -> Result<Application> {
    let status_str: String = row.get("status")?;
    let status = ApplicationStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_err(AppError::Other(format!(
            "Invalid application status: {}",
            status_str
        )))
    })?;

    Ok(Application {
        id: row.get("id")?,
        job_id: row.get("job_id")?,
        applicant: row.get("applicant")?,
        status,
        created_at: row.get("created_at")?,
    })
}

pub fn map_notification_row(row: &Row) -> Result<Notification> {
    let audience_str: String = row.get("audience")?;
    let audience = Audience::from_db_str(&audience_str).ok_or_else(|| {
        conversion_err(AppError::Other(format!("Invalid audience: {}", audience_str)))
    })?;

    Ok(Notification {
        id: row.get("id")?,
        title: row.get("title")?,
        message: row.get("message")?,
        audience,
        related_job_id: row.get("related_job_id")?,
        related_application_id: row.get("related_application_id")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------

pub fn insert_job(conn: &Connection, job: &Job) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO jobs (title, category, pay, posted_by, location, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            job.title,
            job.category,
            job.pay,
            job.posted_by,
            job.location,
            job.status.to_db_str(),
            job.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_job(conn: &Connection, id: i64) -> AppResult<Option<Job>> {
    let mut stmt = conn.prepare("SELECT * FROM jobs WHERE id = ?1")?;
    let job = stmt.query_row([id], map_job_row).optional()?;
    Ok(job)
}

/// Case-insensitive substring match on title OR category.
/// An empty (or absent) term returns every job. Insertion order for
/// reproducibility.
pub fn load_jobs(conn: &Connection, search: Option<&str>) -> AppResult<Vec<Job>> {
    let term = search.map(str::trim).unwrap_or("");

    let mut out = Vec::new();

    if term.is_empty() {
        let mut stmt = conn.prepare("SELECT * FROM jobs ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_job_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        // LIKE special characters in the term are escaped so a search
        // for "50%" matches literally.
        let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        let pattern = format!("%{}%", escaped.to_lowercase());
        let mut stmt = conn.prepare(
            "SELECT * FROM jobs
             WHERE LOWER(title) LIKE ?1 ESCAPE '\\'
                OR LOWER(category) LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([pattern], map_job_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

pub fn load_jobs_by_poster(conn: &Connection, posted_by: &str) -> AppResult<Vec<Job>> {
    let mut stmt = conn.prepare("SELECT * FROM jobs WHERE posted_by = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([posted_by], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_job_status(conn: &Connection, id: i64, status: JobStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE jobs SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------
// Applications
// ---------------------------------------------------------------

pub fn insert_application(conn: &Connection, app: &Application) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO applications (job_id, applicant, status, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![app.job_id, app.applicant, app.status.to_db_str(), app.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_application(conn: &Connection, id: i64) -> AppResult<Option<Application>> {
    let mut stmt = conn.prepare("SELECT * FROM applications WHERE id = ?1")?;
    let app = stmt.query_row([id], map_application_row).optional()?;
    Ok(app)
}

pub fn application_exists(conn: &Connection, job_id: i64, applicant: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM applications WHERE job_id = ?1 AND applicant = ?2 LIMIT 1")?;
    Ok(stmt.exists(params![job_id, applicant])?)
}

/// Applications received for one job, newest-first like the other
/// listing queries.
pub fn load_applications_by_job(conn: &Connection, job_id: i64) -> AppResult<Vec<Application>> {
    let mut stmt = conn.prepare("SELECT * FROM applications WHERE job_id = ?1 ORDER BY id DESC")?;
    let rows = stmt.query_map([job_id], map_application_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One row of the "my applications" projection: the application
/// joined with its job's display fields, or the placeholder when the
/// job row is gone.
#[derive(Debug, Clone)]
pub struct ApplicationWithJob {
    pub application: Application,
    pub job_title: String,
    pub job_pay: String,
    pub job_location: String,
}

/// LEFT JOIN so an application whose job disappeared still renders,
/// with `JOB_UNAVAILABLE` substituted for the missing title.
pub fn load_applications_by_applicant(
    conn: &Connection,
    applicant: &str,
) -> AppResult<Vec<ApplicationWithJob>> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.job_id, a.applicant, a.status, a.created_at,
                j.title AS job_title, j.pay AS job_pay, j.location AS job_location
         FROM applications a
         LEFT JOIN jobs j ON j.id = a.job_id
         WHERE a.applicant = ?1
         ORDER BY a.id DESC",
    )?;

    let rows = stmt.query_map([applicant], |row| {
        let application = map_application_row(row)?;
        let job_title: Option<String> = row.get("job_title")?;
        let job_pay: Option<String> = row.get("job_pay")?;
        let job_location: Option<String> = row.get("job_location")?;

        Ok(ApplicationWithJob {
            application,
            job_title: job_title.unwrap_or_else(|| JOB_UNAVAILABLE.to_string()),
            job_pay: job_pay.unwrap_or_default(),
            job_location: job_location.unwrap_or_default(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Pending applications for a job, excluding one id. Used by the
/// accept command to auto-reject the competition.
pub fn load_pending_competitors(
    conn: &Connection,
    job_id: i64,
    except_id: i64,
) -> AppResult<Vec<Application>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM applications
         WHERE job_id = ?1 AND id != ?2 AND status = 'Pending'
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![job_id, except_id], map_application_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_application_status(
    conn: &Connection,
    id: i64,
    status: ApplicationStatus,
) -> AppResult<()> {
    conn.execute(
        "UPDATE applications SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------

pub fn insert_notification(conn: &Connection, notif: &Notification) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO notifications
            (title, message, audience, related_job_id, related_application_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            notif.title,
            notif.message,
            notif.audience.to_db_str(),
            notif.related_job_id,
            notif.related_application_id,
            notif.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Notifications visible to `role`: its own audience plus 'Both',
/// newest-first (id order doubles as the insertion tie-break).
pub fn load_notifications(conn: &Connection, role: Role) -> AppResult<Vec<Notification>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM notifications
         WHERE audience = ?1 OR audience = 'Both'
         ORDER BY id DESC",
    )?;
    let rows = stmt.query_map([role.to_db_str()], map_notification_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------
// Session
// ---------------------------------------------------------------

pub fn current_session(conn: &Connection) -> AppResult<Option<Session>> {
    let mut stmt = conn.prepare("SELECT * FROM session ORDER BY id DESC LIMIT 1")?;
    let session = stmt
        .query_row([], |row| {
            let role_str: String = row.get("role")?;
            let role = Role::from_db_str(&role_str).ok_or_else(|| {
                conversion_err(AppError::InvalidRole(role_str.clone()))
            })?;

            Ok(Session {
                id: row.get("id")?,
                name: row.get("name")?,
                role,
                verified: row.get::<_, i64>("verified")? == 1,
                created_at: row.get("created_at")?,
            })
        })
        .optional()?;
    Ok(session)
}

/// Single-actor model: replacing the session row is a logout + login.
pub fn replace_session(conn: &Connection, session: &Session) -> AppResult<()> {
    conn.execute("DELETE FROM session", [])?;
    conn.execute(
        "INSERT INTO session (name, role, verified, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            session.name,
            session.role.to_db_str(),
            if session.verified { 1 } else { 0 },
            session.created_at,
        ],
    )?;
    Ok(())
}

pub fn clear_session(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM session", [])?;
    Ok(())
}
