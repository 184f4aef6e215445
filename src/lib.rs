//! University course and scholarship scraper
//!
//! Fetches the public course listing and funding pages, cleans the
//! extracted text and writes a three-sheet Excel report.

pub mod config;
pub mod error;
pub mod excel;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scrapers;
pub mod types;

pub use types::*;
