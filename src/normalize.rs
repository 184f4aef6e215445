//! Text Normalization and Deduplication Module
//!
//! Provides functions to:
//! - Collapse whitespace and title-case names
//! - Strip listing boilerplate from course names
//! - Deduplicate courses by normalized name, keeping discovery order
//! - Reduce scholarship amounts to the bare currency figure

use crate::types::{CourseRecord, ScholarshipRecord, ScrapedData};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Link text suffix the course listing appends to some entries
const COURSE_BOILERPLATE: &str = "Course Details";

const CURRENCY_SYMBOLS: &[char] = &['£', '$'];

static CURRENCY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S*[£$]\S*").expect("currency token pattern is valid"));

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first letter of each word and lower-case the rest.
///
/// A word is a run of alphanumerics, so a leading digit keeps the letters
/// after it lower-case ("2nd year" becomes "2nd Year"). An apostrophe inside
/// a word does not start a new one, so "king's" becomes "King's".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && (c == '\'' || c == '\u{2019}');
        }
    }

    out
}

pub fn has_currency_symbol(text: &str) -> bool {
    text.contains(CURRENCY_SYMBOLS)
}

/// Normalized form of a course name; this is the course's identity.
pub fn normalize_course_name(raw: &str) -> String {
    let mut name = collapse_whitespace(&title_case(raw));

    // Removing the phrase can leave a new match behind, so strip to a fixpoint.
    while name.contains(COURSE_BOILERPLATE) {
        name = collapse_whitespace(&title_case(&name.replace(COURSE_BOILERPLATE, "")));
    }

    name
}

/// Keep the first course for each name, in the order they were found.
pub fn dedup_courses(courses: Vec<CourseRecord>) -> Vec<CourseRecord> {
    let mut seen = HashSet::new();
    courses
        .into_iter()
        .filter(|course| seen.insert(course.name.clone()))
        .collect()
}

/// Normalize names in place, then collapse duplicates.
pub fn clean_courses(courses: &mut Vec<CourseRecord>) {
    for course in courses.iter_mut() {
        course.name = normalize_course_name(&course.name);
    }

    let before = courses.len();
    *courses = dedup_courses(std::mem::take(courses));
    debug!("Removed {} duplicate courses", before - courses.len());
}

/// Reduce an amount string to the token carrying the currency symbol.
///
/// "Eligible students receive £1,200 per year" gives "£1200". Values with no
/// currency symbol are returned with whitespace collapsed only.
pub fn reduce_amount(amount: &str) -> String {
    let amount = collapse_whitespace(amount);
    if amount.is_empty() || !has_currency_symbol(&amount) {
        return amount;
    }

    let stripped = amount.replace(',', "");
    match CURRENCY_TOKEN.find(&stripped) {
        Some(token) => token.as_str().to_string(),
        None => stripped
            .split_whitespace()
            .next()
            .unwrap_or(&stripped)
            .to_string(),
    }
}

pub fn clean_scholarship(scholarship: &mut ScholarshipRecord) {
    scholarship.name = title_case(&collapse_whitespace(&scholarship.name));
    scholarship.description = collapse_whitespace(&scholarship.description);
    scholarship.source_url = collapse_whitespace(&scholarship.source_url);

    if let Some(eligibility) = scholarship.eligibility.as_mut() {
        *eligibility = collapse_whitespace(eligibility);
    }
    if let Some(amount) = scholarship.amount.as_mut() {
        *amount = reduce_amount(amount);
    }
}

/// Normalize everything collected in a run.
pub fn clean_data(data: &mut ScrapedData) {
    clean_courses(&mut data.courses);
    for scholarship in data.scholarships.iter_mut() {
        clean_scholarship(scholarship);
    }
}
