use crate::core::auth::require_role;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    application_exists, find_job, insert_application, insert_notification,
};
use crate::errors::{AppError, AppResult};
use crate::models::application::Application;
use crate::models::notification::{Audience, Notification};
use crate::models::role::Role;
use crate::ui::messages::success;

/// High-level business logic for the `apply` command.
pub struct ApplyLogic;

impl ApplyLogic {
    /// Apply to a job as the current Worker session.
    ///
    /// Preconditions, checked inside the transaction so a concurrent
    /// writer cannot slip between check and insert:
    /// - the job exists (NotFound otherwise)
    /// - the job is still Open (Conflict)
    /// - this worker has not applied to it before (Conflict; backed by
    ///   the UNIQUE(job_id, applicant) constraint)
    ///
    /// On success the Pending application plus both notifications
    /// (applicant receipt and employer alert) commit together.
    pub fn apply(pool: &mut DbPool, job_id: i64) -> AppResult<Application> {
        let session = require_role(&pool.conn, Role::Worker, "apply to jobs")?;

        let tx = pool.conn.transaction()?;

        let job = find_job(&tx, job_id)?
            .ok_or_else(|| AppError::NotFound(format!("job {}", job_id)))?;

        if !job.status.is_open() {
            return Err(AppError::Conflict(format!(
                "\"{}\" is no longer open (status: {})",
                job.title,
                job.status.to_db_str()
            )));
        }

        if application_exists(&tx, job_id, &session.name)? {
            return Err(AppError::Conflict(format!(
                "you already applied to \"{}\"",
                job.title
            )));
        }

        let mut app = Application::new(job_id, &session.name);
        let app_id = insert_application(&tx, &app)?;
        app.id = app_id;

        // Employer alert first, applicant receipt second: the worker's
        // own receipt tops their newest-first feed.
        let employer_notif = Notification::new(
            "New Applicant",
            &format!(
                "{} applied for your gig \"{}\". Check details to review.",
                session.name, job.title
            ),
            Audience::Employer,
            Some(job_id),
            Some(app_id),
        );
        insert_notification(&tx, &employer_notif)?;

        let worker_notif = Notification::new(
            "Application Sent",
            &format!(
                "You applied for \"{}\". Waiting for employer response.",
                job.title
            ),
            Audience::Worker,
            Some(job_id),
            Some(app_id),
        );
        insert_notification(&tx, &worker_notif)?;

        oplog(
            &tx,
            "apply",
            &format!("application {}", app_id),
            &format!("{} applied for \"{}\"", session.name, job.title),
        )?;

        tx.commit()?;

        success(format!(
            "Applied for \"{}\" — application id {}.",
            job.title, app_id
        ));

        Ok(app)
    }
}
