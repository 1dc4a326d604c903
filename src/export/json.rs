use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Write any flat export records as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &str, records: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
