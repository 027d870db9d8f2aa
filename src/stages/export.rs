//! Tabular export of the enriched record set.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::StageError;
use crate::models::NewsRecord;

/// Column headers, in export order. The raw image URL is deliberately
/// absent from the projection.
const HEADERS: [&str; 7] = [
    "Title",
    "Date",
    "Description",
    "Picture Filename",
    "Counter Title",
    "Counter Description",
    "Contains Money",
];

/// One export row; a missing picture filename serializes as an empty cell.
#[derive(Serialize)]
struct Row<'a> {
    title: &'a str,
    date: &'a str,
    description: &'a str,
    picture_filename: Option<&'a str>,
    counter_title: usize,
    counter_description: usize,
    contains_money: bool,
}

impl<'a> From<&'a NewsRecord> for Row<'a> {
    fn from(record: &'a NewsRecord) -> Self {
        Self {
            title: &record.title,
            date: &record.date,
            description: &record.description,
            picture_filename: record.picture_filename.as_deref(),
            counter_title: record.counter_title,
            counter_description: record.counter_description,
            contains_money: record.contains_money,
        }
    }
}

/// Write the record set to `path` as a tabular file.
///
/// Always writes the header row, even over an empty set, so a degraded run
/// still produces a well-formed artifact. A write failure is recoverable:
/// the caller logs it and the run completes.
#[instrument(level = "info", skip(records))]
pub fn run(records: &[NewsRecord], path: &str) -> Result<(), StageError> {
    let soft = |e: String| StageError::Recoverable(format!("export to {path}: {e}"));

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| soft(e.to_string()))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| soft(e.to_string()))?;

    writer
        .write_record(HEADERS)
        .map_err(|e| soft(e.to_string()))?;
    for record in records {
        writer
            .serialize(Row::from(record))
            .map_err(|e| soft(e.to_string()))?;
    }
    writer.flush().map_err(|e| soft(e.to_string()))?;

    info!(rows = records.len(), %path, "Wrote export");
    Ok(())
}
