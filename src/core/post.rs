use crate::core::auth::require_role;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_job, insert_notification};
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::models::notification::{Audience, Notification};
use crate::models::role::Role;
use crate::ui::messages::success;

/// High-level business logic for the `post` command.
pub struct PostLogic;

impl PostLogic {
    /// Post a new job as the current Employer session.
    ///
    /// The job insert and its Worker-audience announcement land in one
    /// transaction: the job is never visible without its notification,
    /// and vice versa.
    pub fn apply(
        pool: &mut DbPool,
        title: &str,
        category: &str,
        pay: &str,
        location: &str,
    ) -> AppResult<Job> {
        let session = require_role(&pool.conn, Role::Employer, "post jobs")?;

        // Validation happens before the transaction: no partial record
        // ever reaches the store.
        let mut job = Job::new(title, category, pay, location, &session.name)?;

        let tx = pool.conn.transaction()?;

        let job_id = insert_job(&tx, &job)?;
        job.id = job_id;

        let notif = Notification::new(
            "New Gig Alert",
            &format!(
                "A new job \"{}\" was just posted in {}.",
                job.title, job.category
            ),
            Audience::Worker,
            Some(job_id),
            None,
        );
        insert_notification(&tx, &notif)?;

        oplog(
            &tx,
            "post",
            &format!("job {}", job_id),
            &format!("{} posted \"{}\" ({})", session.name, job.title, job.category),
        )?;

        tx.commit()?;

        success(format!(
            "Posted \"{}\" ({}) — job id {}.",
            job.title, job.category, job_id
        ));

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthLogic;
    use crate::db::initialize::init_db;
    use crate::db::queries::{load_jobs, load_notifications};
    use crate::errors::AppError;
    use rusqlite::Connection;

    fn test_pool() -> DbPool {
        let conn = Connection::open_in_memory().expect("in-memory db");
        init_db(&conn).expect("init");
        DbPool { conn }
    }

    #[test]
    fn employer_posts_job_and_workers_are_notified() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Walter Black", Role::Employer).unwrap();

        let job =
            PostLogic::apply(&mut pool, "Leaky Faucet Repair", "Plumbing", "₱500", "Zone 1")
                .unwrap();
        assert!(job.id > 0);

        let jobs = load_jobs(&pool.conn, None).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Leaky Faucet Repair");

        let worker_notifs = load_notifications(&pool.conn, Role::Worker).unwrap();
        assert_eq!(worker_notifs.len(), 1);
        assert!(worker_notifs[0].message.contains("Leaky Faucet Repair"));
        assert_eq!(worker_notifs[0].related_job_id, Some(job.id));
    }

    #[test]
    fn worker_cannot_post() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Bensoy Gon", Role::Worker).unwrap();

        let err = PostLogic::apply(&mut pool, "Fix sink", "Plumbing", "₱500", "Zone 1")
            .expect_err("must be rejected");
        assert!(matches!(err, AppError::Authorization(_)));

        assert!(load_jobs(&pool.conn, None).unwrap().is_empty());
    }

    #[test]
    fn validation_failure_leaves_no_trace() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Walter Black", Role::Employer).unwrap();

        let err = PostLogic::apply(&mut pool, "", "Plumbing", "₱500", "Zone 1")
            .expect_err("empty title");
        assert!(matches!(err, AppError::Validation(_)));

        assert!(load_jobs(&pool.conn, None).unwrap().is_empty());
        assert!(load_notifications(&pool.conn, Role::Worker).unwrap().is_empty());
    }

    #[test]
    fn job_ids_are_unique_across_posts() {
        let mut pool = test_pool();
        AuthLogic::login(&mut pool, "Walter Black", Role::Employer).unwrap();

        let mut ids = Vec::new();
        for i in 0..5 {
            let job = PostLogic::apply(
                &mut pool,
                &format!("Job {}", i),
                "Errands",
                "₱100",
                "Zone 2",
            )
            .unwrap();
            ids.push(job.id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
