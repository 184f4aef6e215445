//! Report Model Module
//!
//! Lays the scraped records out as named sheets of header + rows, together
//! with the sizing rules the workbook writer applies. Building the model is
//! separate from writing the file so the layout can be checked directly.

use crate::types::{ScholarshipRecord, ScrapedData};
use chrono::NaiveDateTime;

pub const COURSES_SHEET: &str = "Courses";
pub const SCHOLARSHIPS_SHEET: &str = "Scholarships";
pub const SUMMARY_SHEET: &str = "Summary";

const COURSE_COLUMN_WIDTH: f64 = 60.0;
const COURSE_ROW_HEIGHT: f64 = 25.0;

/// Upper bound for auto-sized columns
const MAX_COLUMN_WIDTH: usize = 50;
const COLUMN_PADDING: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    fn display_len(&self) -> usize {
        match self {
            CellValue::Text(text) => text.chars().count(),
            CellValue::Number(n) => n.to_string().len(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

/// How a sheet is sized and styled.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetLayout {
    /// Fixed-width single column with fixed row heights, Arial text
    CourseList { column_width: f64, row_height: f64 },
    /// Widths fitted to content, top-aligned cells
    AutoFit,
}

#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub layout: SheetLayout,
}

impl Sheet {
    /// Width of every column as written to the workbook.
    ///
    /// Auto-fit columns take the longer of the header and the longest cell,
    /// plus padding, capped at `MAX_COLUMN_WIDTH`.
    pub fn column_widths(&self) -> Vec<f64> {
        match self.layout {
            SheetLayout::CourseList { column_width, .. } => vec![column_width; self.columns.len()],
            SheetLayout::AutoFit => self
                .columns
                .iter()
                .enumerate()
                .map(|(col, header)| {
                    let longest_cell = self
                        .rows
                        .iter()
                        .filter_map(|row| row.get(col))
                        .map(CellValue::display_len)
                        .max()
                        .unwrap_or(0);
                    let width = header.chars().count().max(longest_cell) + COLUMN_PADDING;
                    width.min(MAX_COLUMN_WIDTH) as f64
                })
                .collect(),
        }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == header)
    }
}

/// Ordered set of sheets making up the exported workbook.
#[derive(Debug, Clone, Default)]
pub struct ReportDocument {
    pub sheets: Vec<Sheet>,
}

impl ReportDocument {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Scholarship columns in the order they appear on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScholarshipColumn {
    Name,
    Amount,
    Eligibility,
    Description,
}

const SCHOLARSHIP_COLUMNS: [ScholarshipColumn; 4] = [
    ScholarshipColumn::Name,
    ScholarshipColumn::Amount,
    ScholarshipColumn::Eligibility,
    ScholarshipColumn::Description,
];

impl ScholarshipColumn {
    fn header(self) -> &'static str {
        match self {
            ScholarshipColumn::Name => "Scholarship Name",
            ScholarshipColumn::Amount => "Amount",
            ScholarshipColumn::Eligibility => "Eligibility",
            ScholarshipColumn::Description => "Description",
        }
    }

    fn value(self, record: &ScholarshipRecord) -> Option<&str> {
        match self {
            ScholarshipColumn::Name => Some(&record.name),
            ScholarshipColumn::Amount => record.amount.as_deref(),
            ScholarshipColumn::Eligibility => record.eligibility.as_deref(),
            ScholarshipColumn::Description => Some(&record.description),
        }
    }

    /// A column is emitted only if some record carries that field.
    fn is_present(self, records: &[ScholarshipRecord]) -> bool {
        records.iter().any(|r| self.value(r).is_some())
    }
}

/// Lay out the Courses, Scholarships and Summary sheets.
///
/// The Scholarships sheet is left out when there are no scholarships.
pub fn build_report(data: &ScrapedData, generated_at: NaiveDateTime) -> ReportDocument {
    let mut sheets = vec![courses_sheet(data)];
    if !data.scholarships.is_empty() {
        sheets.push(scholarships_sheet(&data.scholarships));
    }
    sheets.push(summary_sheet(data, generated_at));

    ReportDocument { sheets }
}

fn courses_sheet(data: &ScrapedData) -> Sheet {
    Sheet {
        name: COURSES_SHEET.to_string(),
        columns: vec!["Course Name".to_string()],
        rows: data
            .courses
            .iter()
            .map(|c| vec![CellValue::from(c.name.as_str())])
            .collect(),
        layout: SheetLayout::CourseList {
            column_width: COURSE_COLUMN_WIDTH,
            row_height: COURSE_ROW_HEIGHT,
        },
    }
}

fn scholarships_sheet(records: &[ScholarshipRecord]) -> Sheet {
    let columns: Vec<ScholarshipColumn> = SCHOLARSHIP_COLUMNS
        .into_iter()
        .filter(|col| col.is_present(records))
        .collect();

    Sheet {
        name: SCHOLARSHIPS_SHEET.to_string(),
        columns: columns.iter().map(|c| c.header().to_string()).collect(),
        rows: records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|col| CellValue::from(col.value(record).unwrap_or("")))
                    .collect()
            })
            .collect(),
        layout: SheetLayout::AutoFit,
    }
}

fn summary_sheet(data: &ScrapedData, generated_at: NaiveDateTime) -> Sheet {
    Sheet {
        name: SUMMARY_SHEET.to_string(),
        columns: vec!["Category".to_string(), "Value".to_string()],
        rows: vec![
            vec![
                CellValue::from("Total Courses"),
                CellValue::Number(data.courses.len() as f64),
            ],
            vec![
                CellValue::from("Total Scholarships"),
                CellValue::Number(data.scholarships.len() as f64),
            ],
            vec![
                CellValue::from("Last Updated"),
                CellValue::Text(generated_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            ],
        ],
        layout: SheetLayout::AutoFit,
    }
}
