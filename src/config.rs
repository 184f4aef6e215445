use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://www.ox.ac.uk";

/// Course links all live under this path.
pub const COURSE_LISTING_PATH: &str = "/admissions/undergraduate/courses/course-listing";

pub const SCHOLARSHIP_PATHS: &[&str] = &[
    "/admissions/undergraduate/fees-and-funding/oxford-support",
    "/admissions/graduate/fees-and-funding/fees-funding-and-scholarship-search",
];

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Pause after each page request
pub const REQUEST_DELAY: Duration = Duration::from_secs(2);

pub const REPORT_PREFIX: &str = "oxford_data";

/// Settings for one scrape run. The binary always runs with `Default`.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub course_listing_path: String,
    pub scholarship_paths: Vec<String>,
    pub user_agent: String,
    pub request_delay: Duration,
    pub output_dir: PathBuf,
    pub report_prefix: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            course_listing_path: COURSE_LISTING_PATH.to_string(),
            scholarship_paths: SCHOLARSHIP_PATHS.iter().map(|p| p.to_string()).collect(),
            user_agent: USER_AGENT.to_string(),
            request_delay: REQUEST_DELAY,
            output_dir: PathBuf::from("."),
            report_prefix: REPORT_PREFIX.to_string(),
        }
    }
}

impl ScraperConfig {
    pub fn course_listing_url(&self) -> String {
        format!("{}{}", self.base_url, self.course_listing_path)
    }

    pub fn scholarship_urls(&self) -> Vec<String> {
        self.scholarship_paths
            .iter()
            .map(|path| format!("{}{}", self.base_url, path))
            .collect()
    }

    /// Anchors pointing below this prefix are treated as course links.
    pub fn course_link_prefix(&self) -> String {
        format!("{}/", self.course_listing_path)
    }

    /// `<output_dir>/<prefix>_YYYYMMDD_HHMMSS.xlsx`
    pub fn report_path(&self, stamp: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.xlsx", self.report_prefix, stamp))
    }
}
