//! Markup extraction.
//!
//! Everything that depends on the source site's page structure lives here.
//! Both extractors are pure functions over the HTML text.

mod courses;
mod scholarships;

pub use courses::extract_courses;
pub use scholarships::{extract_scholarships, select_scholarship_sections};

use scraper::ElementRef;

/// All text inside an element, trimmed.
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
