// src/main.rs
// Scrapes the VacancyMail jobs page once and exits.
//
// Exit codes:
//   0  scrape completed and CSV written
//   1  unexpected error (filesystem, CSV)
//   2  request failed (network, timeout, non-2xx)
//   3  page had no job listings

use vacancy_scrape::config::ScrapeConfig;
use vacancy_scrape::log::FileLog;
use vacancy_scrape::runner::{self, RunOutcome};

const EXIT_NO_LISTINGS: i32 = 3;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let config = ScrapeConfig::default();
    let mut log = FileLog::new(&config.log_path);

    println!("Starting scraping process...");

    match runner::run(&config, &mut log) {
        Ok(RunOutcome::Saved(summary)) => {
            println!(
                "Scraping completed! Data saved to '{}'",
                summary.path.display()
            );
            0
        }
        Ok(RunOutcome::NoListings) => {
            println!("No job listings found.");
            EXIT_NO_LISTINGS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
