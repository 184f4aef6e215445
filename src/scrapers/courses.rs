use super::element_text;
use crate::types::CourseRecord;
use scraper::{Html, Selector};
use tracing::{info, warn};

/// Collect course candidates from the course-listing page.
///
/// Every anchor whose href contains `link_prefix` is a candidate; its text
/// becomes the course name. Blank and single-character names are dropped.
pub fn extract_courses(html: &str, link_prefix: &str) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    let mut courses = Vec::new();

    let selector_str = format!("a[href*=\"{}\"]", link_prefix);
    let selector = match Selector::parse(&selector_str) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Invalid course link selector {}: {}", selector_str, e);
            return courses;
        }
    };

    for link in document.select(&selector) {
        let name = element_text(&link);
        if name.chars().count() > 1 {
            info!("Found course: {}", name);
            courses.push(CourseRecord::new(name));
        }
    }

    courses
}
