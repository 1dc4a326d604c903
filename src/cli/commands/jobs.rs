use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_session;
use crate::db::pool::DbPool;
use crate::db::queries::{load_jobs, load_jobs_by_poster};
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::utils::formatting::time_ago;
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Jobs { search, mine } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let jobs = if *mine {
            let session = require_session(&pool.conn)?;
            load_jobs_by_poster(&pool.conn, &session.name)?
        } else {
            load_jobs(&pool.conn, search.as_deref())?
        };

        if jobs.is_empty() {
            println!("No gigs found.");
            return Ok(());
        }

        println!("🧰 Available Gigs ({})\n", jobs.len());
        print!("{}", render_jobs(&jobs));
    }
    Ok(())
}

fn render_jobs(jobs: &[Job]) -> String {
    let width_of = |header: &str, value: &dyn Fn(&Job) -> String| -> usize {
        jobs.iter()
            .map(|j| UnicodeWidthStr::width(value(j).as_str()))
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(header.len())
    };

    let mut table = Table::new(vec![
        Column { header: "ID".into(), width: width_of("ID", &|j| j.id.to_string()) },
        Column { header: "TITLE".into(), width: width_of("TITLE", &|j| j.title.clone()) },
        Column { header: "CATEGORY".into(), width: width_of("CATEGORY", &|j| j.category.clone()) },
        Column { header: "PAY".into(), width: width_of("PAY", &|j| j.pay.clone()) },
        Column { header: "LOCATION".into(), width: width_of("LOCATION", &|j| j.location.clone()) },
        Column { header: "POSTED BY".into(), width: width_of("POSTED BY", &|j| j.posted_by.clone()) },
        Column { header: "STATUS".into(), width: 6 },
        Column { header: "POSTED".into(), width: 12 },
    ]);

    for j in jobs {
        table.add_row(vec![
            j.id.to_string(),
            j.title.clone(),
            j.category.clone(),
            j.pay.clone(),
            j.location.clone(),
            j.posted_by.clone(),
            j.status.to_db_str().to_string(),
            time_ago(&j.created_at),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_every_job_once() {
        let jobs = vec![
            Job::new("Leaky Faucet Repair", "Plumbing", "₱500", "Zone 1", "Walter Black")
                .unwrap(),
            Job::new("Tutor in Algebra", "Tutoring", "₱350/hr", "Zone 3", "Walter Black")
                .unwrap(),
        ];
        let out = render_jobs(&jobs);
        assert!(out.contains("Leaky Faucet Repair"));
        assert!(out.contains("Tutor in Algebra"));
        assert!(out.contains("TITLE"));
    }
}
