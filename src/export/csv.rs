use crate::export::model::{
    ApplicationExport, JobExport, application_headers, job_headers,
};
use csv::Writer;

/// Write jobs as CSV to the given file.
pub fn write_jobs_csv(path: &str, jobs: &[JobExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(job_headers())?;

    for j in jobs {
        wtr.write_record(&[
            j.id.to_string(),
            j.title.clone(),
            j.category.clone(),
            j.pay.clone(),
            j.posted_by.clone(),
            j.location.clone(),
            j.status.clone(),
            j.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write applications as CSV to the given file.
pub fn write_applications_csv(path: &str, apps: &[ApplicationExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(application_headers())?;

    for a in apps {
        wtr.write_record(&[
            a.id.to_string(),
            a.job_id.to_string(),
            a.job_title.clone(),
            a.applicant.clone(),
            a.status.clone(),
            a.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
