use std::path::PathBuf;

/// A course found on the course-listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A funding opportunity found on one of the scholarship pages.
///
/// `eligibility` and `amount` are only set when the description looks like
/// it carries that information; see `scrapers::scholarships`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarshipRecord {
    pub name: String,
    pub description: String,
    pub eligibility: Option<String>,
    pub amount: Option<String>,
    pub source_url: String,
}

/// Everything collected during one run.
#[derive(Debug, Clone, Default)]
pub struct ScrapedData {
    pub courses: Vec<CourseRecord>,
    pub scholarships: Vec<ScholarshipRecord>,
}

/// Outcome of a completed run, returned to the caller after export.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub courses: usize,
    pub scholarships: usize,
    pub output_path: PathBuf,
}
