// src/log.rs

// Run log sink. Constructed by the frontend and passed into the
// runner, so tests can capture entries without touching the disk.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Sink for run events. One entry per significant event.
pub trait RunLog {
    fn log(&mut self, level: Level, msg: &str);

    fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg);
    }
    fn warning(&mut self, msg: &str) {
        self.log(Level::Warning, msg);
    }
    fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg);
    }
}

/// Append-only file sink: `<timestamp> - <LEVEL> - <message>` per line.
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl RunLog for FileLog {
    fn log(&mut self, level: Level, msg: &str) {
        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        let line = format!("{timestamp} - {level} - {msg}\n");

        // Logging never fails the run
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemoryLog {
    pub entries: Vec<(Level, String)>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries at `level`, messages only.
    pub fn messages_at(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl RunLog for MemoryLog {
    fn log(&mut self, level: Level, msg: &str) {
        self.entries.push((level, s!(msg)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_log_appends_formatted_lines() {
        let mut path = std::env::temp_dir();
        path.push(format!("vacancy_scrape_log_{}", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut log = FileLog::new(&path);
        log.warning("No job listings found on the page.");
        log.info("done");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" - WARNING - No job listings found on the page."));
        assert!(lines[1].ends_with(" - INFO - done"));

        let _ = std::fs::remove_file(&path);
    }
}
