// src/error.rs

use thiserror::Error;

/// Failure taxonomy for a scrape run.
///
/// Empty listings are deliberately NOT here — finding nothing is a
/// run outcome, not a failure (see `runner::RunOutcome`).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-layer failure, timeout, or non-2xx status from the fetch.
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),

    /// Filesystem trouble while writing the export or the log.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization trouble.
    #[error("export error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// Process exit code for this failure. 0 is success, 3 is the
    /// empty-listings outcome; both live outside this enum.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::Request(_) => 2,
            ScrapeError::Io(_) | ScrapeError::Csv(_) => 1,
        }
    }
}

/// Error message with its full cause chain appended, for the run log.
/// reqwest's `Display` in particular hides the OS-level cause.
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
