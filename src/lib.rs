// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod log;
pub mod net;
pub mod runner;
pub mod scrape;
