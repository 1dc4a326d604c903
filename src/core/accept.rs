use crate::config::Config;
use crate::core::auth::require_role;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_application, find_job, insert_notification, load_pending_competitors,
    update_application_status, update_job_status,
};
use crate::errors::{AppError, AppResult};
use crate::models::application::ApplicationStatus;
use crate::models::job::JobStatus;
use crate::models::notification::{Audience, Notification};
use crate::models::role::Role;
use crate::ui::messages::{info, success};

/// High-level business logic for the `accept` command.
pub struct AcceptLogic;

impl AcceptLogic {
    /// Accept an applicant as the current Employer session.
    ///
    /// Preconditions:
    /// - the application exists (NotFound), and so does its job
    /// - the current session posted that job (Authorization)
    /// - the application is still Pending (Conflict: accepting twice or
    ///   accepting a rejected application is refused)
    ///
    /// With `close_job_on_accept` (the default) the job transitions to
    /// Filled and every competing Pending application is auto-rejected,
    /// each rejected applicant receiving a notification. The whole
    /// decision commits atomically: no observer ever sees an accepted
    /// applicant next to a still-open job.
    pub fn apply(pool: &mut DbPool, cfg: &Config, application_id: i64) -> AppResult<()> {
        let session = require_role(&pool.conn, Role::Employer, "accept applicants")?;

        let tx = pool.conn.transaction()?;

        let app = find_application(&tx, application_id)?
            .ok_or_else(|| AppError::NotFound(format!("application {}", application_id)))?;

        let job = find_job(&tx, app.job_id)?
            .ok_or_else(|| AppError::NotFound(format!("job {}", app.job_id)))?;

        if job.posted_by != session.name {
            return Err(AppError::Authorization(format!(
                "only the employer who posted \"{}\" can accept applicants for it",
                job.title
            )));
        }

        if !app.status.is_pending() {
            return Err(AppError::Conflict(format!(
                "application {} is not pending (status: {})",
                app.id,
                app.status.to_db_str()
            )));
        }

        update_application_status(&tx, app.id, ApplicationStatus::Accepted)?;

        let hired_notif = Notification::new(
            "You got the Job!",
            &format!(
                "You have been hired for \"{}\". Please contact the employer.",
                job.title
            ),
            Audience::Worker,
            Some(job.id),
            Some(app.id),
        );
        insert_notification(&tx, &hired_notif)?;

        let mut rejected = 0usize;
        if cfg.close_job_on_accept {
            update_job_status(&tx, job.id, JobStatus::Filled)?;

            for competitor in load_pending_competitors(&tx, job.id, app.id)? {
                update_application_status(&tx, competitor.id, ApplicationStatus::Rejected)?;
                insert_notification(
                    &tx,
                    &Notification::new(
                        "Application Update",
                        &format!(
                            "\"{}\" has been filled. Your application was not selected.",
                            job.title
                        ),
                        Audience::Worker,
                        Some(job.id),
                        Some(competitor.id),
                    ),
                )?;
                rejected += 1;
            }
        }

        oplog(
            &tx,
            "accept",
            &format!("application {}", app.id),
            &format!(
                "{} hired {} for \"{}\"",
                session.name, app.applicant, job.title
            ),
        )?;

        tx.commit()?;

        success(format!(
            "Hired {} for \"{}\". They will be notified.",
            app.applicant, job.title
        ));
        if cfg.close_job_on_accept {
            info(format!(
                "Job marked Filled; {} competing application(s) auto-rejected.",
                rejected
            ));
        }

        Ok(())
    }
}
