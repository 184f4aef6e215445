//! Scrape Run Orchestration
//!
//! Runs one full pass: courses, then each scholarship page, then cleanup
//! and export. Fetch failures only cost the records of that page; an export
//! failure ends the run with an error.

use crate::config::ScraperConfig;
use crate::error::ExportError;
use crate::excel::write_workbook;
use crate::fetch::PageFetcher;
use crate::normalize::clean_data;
use crate::report::build_report;
use crate::scrapers::{extract_courses, extract_scholarships};
use crate::types::{RunSummary, ScrapedData};
use chrono::Local;
use std::path::Path;
use std::thread;
use tracing::{error, info};

pub struct Scraper<F: PageFetcher> {
    config: ScraperConfig,
    fetcher: F,
    data: ScrapedData,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(config: ScraperConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            data: ScrapedData::default(),
        }
    }

    pub fn data(&self) -> &ScrapedData {
        &self.data
    }

    /// Fetch the course listing and append any courses found.
    pub fn collect_courses(&mut self) {
        let url = self.config.course_listing_url();
        match self.fetcher.fetch(&url) {
            Ok(html) => {
                let courses = extract_courses(&html, &self.config.course_link_prefix());
                self.data.courses.extend(courses);
            }
            Err(e) => error!("Failed to fetch course listing: {}", e),
        }
    }

    /// Fetch each scholarship page in order, pausing after every page.
    pub fn collect_scholarships(&mut self) {
        for url in self.config.scholarship_urls() {
            match self.fetcher.fetch(&url) {
                Ok(html) => {
                    let scholarships = extract_scholarships(&html, &url);
                    self.data.scholarships.extend(scholarships);
                }
                Err(e) => error!("Failed to fetch scholarship page: {}", e),
            }
            self.pause();
        }
    }

    /// Write the collected data to `path`.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        let doc = build_report(&self.data, Local::now().naive_local());
        if let Err(e) = write_workbook(&doc, path) {
            error!("Error exporting to Excel: {}", e);
            return Err(e);
        }

        info!("Data exported to {}", path.display());
        Ok(())
    }

    pub fn run(&mut self) -> Result<RunSummary, ExportError> {
        info!("Starting web scraping process...");

        self.collect_courses();
        info!("Found {} courses", self.data.courses.len());

        self.pause();

        self.collect_scholarships();
        info!("Found {} scholarships", self.data.scholarships.len());

        clean_data(&mut self.data);

        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let output_path = self.config.report_path(&stamp);
        self.export(&output_path)?;

        let summary = RunSummary {
            courses: self.data.courses.len(),
            scholarships: self.data.scholarships.len(),
            output_path,
        };
        print_summary(&summary);

        info!("Web scraping completed!");
        Ok(summary)
    }

    fn pause(&self) {
        if !self.config.request_delay.is_zero() {
            thread::sleep(self.config.request_delay);
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\nExport Summary:");
    println!("Courses found: {}", summary.courses);
    println!("Scholarships found: {}", summary.scholarships);
    println!("Data has been exported to {}", summary.output_path.display());
}
