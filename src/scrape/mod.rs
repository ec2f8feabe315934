// src/scrape/mod.rs
mod jobs;
pub use jobs::extract_jobs;
