use super::element_text;
use crate::normalize::has_currency_symbol;
use crate::types::ScholarshipRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

/// Funding pages tag each entry with one of these classes.
const SECTION_SELECTOR: &str =
    "div.scholarship-item, div.content-item, article.scholarship-item, article.content-item";

/// Used when no tagged entries exist; each heading is taken as a name.
const HEADING_SELECTOR: &str = "h2, h3, h4";

/// Collect scholarship candidates from one funding page.
///
/// Every selected element yields a record, even when its text is empty.
///
/// The description of each entry is the first `<p>` or `<div>` that follows
/// the name element in document order. The search is not bounded, so on an
/// irregular page a name can pick up an unrelated paragraph.
pub fn extract_scholarships(html: &str, source_url: &str) -> Vec<ScholarshipRecord> {
    let document = Html::parse_document(html);
    let sections = select_scholarship_sections(&document);

    let order: Vec<ElementRef> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    sections
        .iter()
        .map(|section| {
            let record = build_record(section, &order, source_url);
            info!("Processed scholarship: {}", record.name);
            record
        })
        .collect()
}

/// Name elements on a funding page: tagged entries, else all h2-h4 headings.
pub fn select_scholarship_sections(document: &Html) -> Vec<ElementRef<'_>> {
    let sections = select_all(document, SECTION_SELECTOR);
    if !sections.is_empty() {
        return sections;
    }

    debug!("No tagged scholarship entries, falling back to headings");
    select_all(document, HEADING_SELECTOR)
}

fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).collect(),
        Err(e) => {
            warn!("Invalid selector {}: {}", selector, e);
            vec![]
        }
    }
}

fn build_record(section: &ElementRef, order: &[ElementRef], source_url: &str) -> ScholarshipRecord {
    let name = element_text(section);
    let description = following_description(section, order);

    let eligibility = description
        .to_lowercase()
        .contains("eligible")
        .then(|| description.clone());
    let amount = has_currency_symbol(&description).then(|| description.clone());

    ScholarshipRecord {
        name,
        description,
        eligibility,
        amount,
        source_url: source_url.to_string(),
    }
}

/// Text of the first `<p>` or `<div>` after `element` in document order,
/// including the element's own descendants. Empty when there is none.
fn following_description(element: &ElementRef, order: &[ElementRef]) -> String {
    let Some(pos) = order.iter().position(|e| e.id() == element.id()) else {
        return String::new();
    };

    order[pos + 1..]
        .iter()
        .find(|e| matches!(e.value().name(), "p" | "div"))
        .map(element_text)
        .unwrap_or_default()
}
