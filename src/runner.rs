// src/runner.rs

use crate::config::ScrapeConfig;
use crate::error::{error_chain, ScrapeError};
use crate::export::{self, ExportSummary};
use crate::log::RunLog;
use crate::{net, scrape};

/// How a run that didn't fail came out.
#[derive(Debug)]
pub enum RunOutcome {
    /// Listings were extracted and exported.
    Saved(ExportSummary),
    /// No listing cards matched; nothing written. A warning, not an error.
    NoListings,
}

/// One full scrape cycle: fetch, extract, export.
///
/// Every significant event lands in `log` exactly once before this
/// returns; the frontend only decides console output and exit code.
pub fn run(config: &ScrapeConfig, log: &mut dyn RunLog) -> Result<RunOutcome, ScrapeError> {
    let body = match net::http_get(config) {
        Ok(body) => body,
        Err(e) => {
            log.error(&format!("Request error: {}", error_chain(&e)));
            return Err(ScrapeError::Request(e));
        }
    };

    let records = scrape::extract_jobs(&body, config.max_jobs);
    if records.is_empty() {
        log.warning("No job listings found on the page.");
        return Ok(RunOutcome::NoListings);
    }

    match export::write_csv(records, &config.out_dir) {
        Ok(summary) => {
            log.info(&format!(
                "Scraping completed. {} jobs saved to {}",
                summary.rows,
                summary.path.display()
            ));
            Ok(RunOutcome::Saved(summary))
        }
        Err(e) => {
            log.error(&format!("Unexpected error: {}", error_chain(&e)));
            Err(e)
        }
    }
}
