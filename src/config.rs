// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

// Net config
pub const JOBS_URL: &str = "https://vacancymail.co.zw/jobs/";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const MAX_JOBS: usize = 10; // most recent listings only

// Export
pub const OUT_FILE_PREFIX: &str = "scraped_data_";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// Run log
pub const LOG_FILE: &str = "scraper.log";

/// Everything a single scrape run needs to know.
///
/// Defaults reproduce the live-site behavior; tests swap in a fixture
/// server URL and a temp output directory.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Page to fetch.
    pub url: String,
    /// Sent as the `User-Agent` header.
    pub user_agent: String,
    /// Upper bound on the whole request. A request past this is a
    /// request failure, not a hang.
    pub timeout: Duration,
    /// Listing cap; containers past this are ignored.
    pub max_jobs: usize,
    /// Directory the timestamped CSV is written into.
    pub out_dir: PathBuf,
    /// Append-only run log.
    pub log_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: s!(JOBS_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_jobs: MAX_JOBS,
            out_dir: PathBuf::from("."),
            log_path: PathBuf::from(LOG_FILE),
        }
    }
}
