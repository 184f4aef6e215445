//! Workbook writer: renders a `ReportDocument` to an `.xlsx` file.

use crate::error::ExportError;
use crate::report::{CellValue, ReportDocument, Sheet, SheetLayout};
use rust_xlsxwriter::{
    Color, ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet, XlsxError,
};
use std::fs;
use std::path::Path;

const HEADER_FILL: u32 = 0x1F4E78;

struct SheetFormats {
    header: Format,
    cell: Format,
}

impl SheetFormats {
    fn for_layout(layout: &SheetLayout) -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let cell = Format::new()
            .set_font_size(11)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        match layout {
            SheetLayout::CourseList { .. } => Self {
                header: header.set_font_name("Arial"),
                cell: cell
                    .set_font_name("Arial")
                    .set_align(FormatAlign::VerticalCenter),
            },
            SheetLayout::AutoFit => Self {
                header,
                cell: cell.set_align(FormatAlign::Top),
            },
        }
    }
}

/// Write every sheet of `doc` to `path`, creating the parent directory.
pub fn write_workbook(doc: &ReportDocument, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::OutputDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let mut workbook = Workbook::new();
    for sheet in &doc.sheets {
        workbook.push_worksheet(render_sheet(sheet)?);
    }
    workbook.save(path)?;

    Ok(())
}

fn render_sheet(sheet: &Sheet) -> Result<Worksheet, XlsxError> {
    let formats = SheetFormats::for_layout(&sheet.layout);
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&sheet.name)?;

    for (col, header) in sheet.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, header, &formats.header)?;
    }

    for (col, width) in sheet.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col as ColNum, width)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let row_num = (i + 1) as RowNum;
        for (col, value) in row.iter().enumerate() {
            match value {
                CellValue::Text(text) => {
                    worksheet.write_string_with_format(row_num, col as ColNum, text, &formats.cell)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row_num, col as ColNum, *n, &formats.cell)?;
                }
            }
        }

        if let SheetLayout::CourseList { row_height, .. } = sheet.layout {
            worksheet.set_row_height(row_num, row_height)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    Ok(worksheet)
}
