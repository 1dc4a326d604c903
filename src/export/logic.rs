use crate::db::pool::DbPool;
use crate::db::queries::{load_applications_by_applicant, load_jobs};
use crate::errors::{AppError, AppResult};
use crate::export::model::{ApplicationExport, JobExport};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use std::io;
use std::path::Path;

/// What to export: the job board or one worker's applications.
pub enum ExportSubject<'a> {
    Jobs,
    Applications { applicant: &'a str },
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export jobs or applications to `file` in the requested format.
    /// The output path must be absolute; an existing file is only
    /// overwritten with `force`.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        subject: ExportSubject<'_>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match subject {
            ExportSubject::Jobs => {
                let jobs: Vec<JobExport> = load_jobs(&pool.conn, None)?
                    .iter()
                    .map(JobExport::from)
                    .collect();

                if jobs.is_empty() {
                    println!("⚠️  No jobs found. Nothing to export.");
                    return Ok(());
                }

                match format {
                    ExportFormat::Csv => csv::write_jobs_csv(file, &jobs)?,
                    ExportFormat::Json => json::write_json(file, &jobs)?,
                }
                notify_export_success("Jobs", path);
            }
            ExportSubject::Applications { applicant } => {
                let apps: Vec<ApplicationExport> =
                    load_applications_by_applicant(&pool.conn, applicant)?
                        .iter()
                        .map(ApplicationExport::from)
                        .collect();

                if apps.is_empty() {
                    println!("⚠️  No applications found. Nothing to export.");
                    return Ok(());
                }

                match format {
                    ExportFormat::Csv => csv::write_applications_csv(file, &apps)?,
                    ExportFormat::Json => json::write_json(file, &apps)?,
                }
                notify_export_success("Applications", path);
            }
        }

        Ok(())
    }
}

/// Refuse to clobber an existing file unless `force` is given.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        return Err(AppError::from(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_rejected() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        crate::db::initialize::init_db(&conn).unwrap();
        let mut pool = DbPool { conn };

        let err = ExportLogic::export(
            &mut pool,
            &ExportFormat::Csv,
            "out.csv",
            ExportSubject::Jobs,
            false,
        )
        .expect_err("relative path");
        assert!(matches!(err, AppError::Export(_)));
    }
}
