//! End-to-end tests for the scrape pipeline
//! Runs the full pass against fixture HTML pages served by a canned fetcher

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use uni_scrape::config::ScraperConfig;
use uni_scrape::error::FetchError;
use uni_scrape::fetch::PageFetcher;
use uni_scrape::pipeline::Scraper;
use uni_scrape::report::{build_report, COURSES_SHEET, SCHOLARSHIPS_SHEET, SUMMARY_SHEET};

/// Serves pages from memory; unknown URLs answer 404.
struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).expect("Failed to read fixture")
}

fn test_config(output_dir: &Path) -> ScraperConfig {
    ScraperConfig {
        request_delay: Duration::ZERO,
        output_dir: output_dir.to_path_buf(),
        ..ScraperConfig::default()
    }
}

fn all_pages(config: &ScraperConfig) -> FixtureFetcher {
    let scholarship_urls = config.scholarship_urls();
    let mut pages = HashMap::new();
    pages.insert(config.course_listing_url(), fixture("course_listing.html"));
    pages.insert(scholarship_urls[0].clone(), fixture("oxford_support.html"));
    pages.insert(scholarship_urls[1].clone(), fixture("graduate_funding.html"));
    FixtureFetcher { pages }
}

#[test]
fn test_full_run_cleans_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fetcher = all_pages(&config);
    let scholarship_urls = config.scholarship_urls();

    let mut scraper = Scraper::new(config, fetcher);
    let summary = scraper.run().unwrap();

    let courses: Vec<_> = scraper.data().courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(courses, vec!["Biology", "Chemistry", "Computer Science", "Physics"]);

    let scholarships = &scraper.data().scholarships;
    assert_eq!(scholarships.len(), 5);

    // Source page order, then page order
    assert_eq!(scholarships[0].source_url, scholarship_urls[0]);
    assert_eq!(scholarships[1].source_url, scholarship_urls[0]);
    assert!(scholarships[2..].iter().all(|s| s.source_url == scholarship_urls[1]));

    let crankstart = &scholarships[0];
    assert!(crankstart.name.starts_with("Crankstart Scholarship"));
    assert_eq!(crankstart.description, "Eligible students receive £1,200 per year");
    assert_eq!(crankstart.eligibility.as_deref(), Some(crankstart.description.as_str()));
    assert_eq!(crankstart.amount.as_deref(), Some("£1200"));

    assert_eq!(scholarships[1].eligibility, None);
    assert_eq!(scholarships[1].amount, None);

    // Heading fallback on the graduate page
    let names: Vec<_> = scholarships[2..].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Clarendon Fund", "Reach Oxford Scholarship", "Crankstart Scholarship"]
    );
    assert_eq!(scholarships[2].amount.as_deref(), Some("$18000"));
    assert_eq!(
        scholarships[3].description,
        "Students from low-income countries are eligible to apply."
    );
    assert!(scholarships[3].eligibility.is_some());
    assert_eq!(scholarships[4].description, "");

    assert_eq!(summary.courses, 4);
    assert_eq!(summary.scholarships, 5);
    assert!(summary.output_path.exists());
    assert!(summary.output_path.starts_with(dir.path()));

    let file_name = summary.output_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("oxford_data_"));
    assert!(file_name.ends_with(".xlsx"));
    // oxford_data_YYYYMMDD_HHMMSS.xlsx
    assert_eq!(file_name.len(), "oxford_data_".len() + 15 + ".xlsx".len());
}

#[test]
fn test_failed_course_page_still_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut fetcher = all_pages(&config);
    fetcher.pages.remove(&config.course_listing_url());

    let mut scraper = Scraper::new(config, fetcher);
    let summary = scraper.run().unwrap();

    assert_eq!(summary.courses, 0);
    assert_eq!(summary.scholarships, 5);
    assert!(summary.output_path.exists());

    let doc = build_report(scraper.data(), Local::now().naive_local());
    let courses = doc.sheet(COURSES_SHEET).unwrap();
    assert!(courses.rows.is_empty());
}

#[test]
fn test_nothing_fetched_gives_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fetcher = FixtureFetcher { pages: HashMap::new() };

    let mut scraper = Scraper::new(config, fetcher);
    let summary = scraper.run().unwrap();

    assert_eq!(summary.courses, 0);
    assert_eq!(summary.scholarships, 0);
    assert!(summary.output_path.exists());

    let doc = build_report(scraper.data(), Local::now().naive_local());
    assert_eq!(doc.sheet_names(), vec![COURSES_SHEET, SUMMARY_SHEET]);
    assert!(doc.sheet(SCHOLARSHIPS_SHEET).is_none());

    let summary_sheet = doc.sheet(SUMMARY_SHEET).unwrap();
    assert_eq!(summary_sheet.rows[0][1].as_number(), Some(0.0));
    assert_eq!(summary_sheet.rows[1][1].as_number(), Some(0.0));
}

#[test]
fn test_collect_stages_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fetcher = all_pages(&config);

    let mut scraper = Scraper::new(config, fetcher);
    scraper.collect_courses();

    // Raw candidates before cleanup: duplicates kept, "X" dropped
    assert_eq!(scraper.data().courses.len(), 6);
    assert!(scraper.data().scholarships.is_empty());

    scraper.collect_scholarships();
    assert_eq!(scraper.data().scholarships.len(), 5);
}
