// src/export.rs

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::{OUT_FILE_PREFIX, TIMESTAMP_FORMAT};
use crate::data::{self, JobRecord};
use crate::error::ScrapeError;

/// What a successful export produced.
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Dedup the records and write them to a fresh timestamped CSV in
/// `out_dir`. Header row comes from the `JobRecord` serde renames.
///
/// The filename embeds the wall clock at write time, so each run gets
/// its own file (two runs within the same second collide).
pub fn write_csv(mut records: Vec<JobRecord>, out_dir: &Path) -> Result<ExportSummary, ScrapeError> {
    data::dedup_records(&mut records);

    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let path = out_dir.join(format!("{OUT_FILE_PREFIX}{timestamp}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(ExportSummary { path, rows: records.len() })
}
