//! Excel workbook projection of an aggregated report.
//!
//! The workbook is first described as a list of [`Sheet`]s, which keeps the content rules
//! testable without parsing spreadsheets, and then rendered with `rust_xlsxwriter`.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use tokio_util::sync::CancellationToken;

use crate::server::{
    error::{report::ReportError, Error},
    model::{db::ObjectiveModel, report::ReportDataset},
    report::statistics::{display_status, progress_percent},
};

pub static OBJECTIVES_SHEET: &str = "Objectives Overview";
pub static KEY_RESULTS_SHEET: &str = "Key Results";
pub static TEAM_PERFORMANCE_SHEET: &str = "Team Performance";

/// Longest string Excel accepts in a single cell, in characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Shown in place of a key result's target or current value when it is unset.
static NOT_SET: &str = "Not set";

/// A table column with a fixed display width.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub header: &'static str,
    pub width: f64,
}

const fn column(header: &'static str, width: f64) -> Column {
    Column { header, width }
}

const OBJECTIVE_COLUMNS: [Column; 8] = [
    column("ID", 8.0),
    column("Title", 40.0),
    column("Description", 50.0),
    column("Progress (%)", 14.0),
    column("Status", 16.0),
    column("Start Date", 14.0),
    column("End Date", 14.0),
    column("Owner", 24.0),
];

const KEY_RESULT_COLUMNS: [Column; 8] = [
    column("Objective ID", 14.0),
    column("Objective Title", 40.0),
    column("Key Result ID", 14.0),
    column("Key Result Title", 40.0),
    column("Progress (%)", 14.0),
    column("Target Value", 14.0),
    column("Current Value", 14.0),
    column("Owner", 24.0),
];

const TEAM_PERFORMANCE_COLUMNS: [Column; 5] = [
    column("Team", 30.0),
    column("Objectives", 12.0),
    column("Completed", 12.0),
    column("At Risk", 12.0),
    column("Avg Progress (%)", 18.0),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    /// Text cell, truncated to the longest string Excel accepts.
    fn text(value: impl Into<String>) -> Self {
        let mut value = value.into();
        if let Some((end, _)) = value.char_indices().nth(MAX_CELL_CHARS) {
            value.truncate(end);
        }

        Self::Text(value)
    }

    fn count(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

/// One worksheet: an optional header block followed by a table.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: &'static str,
    /// Rows written above the table, the first one styled as a title
    pub header_block: Vec<Vec<Cell>>,
    pub columns: &'static [Column],
    pub rows: Vec<Vec<Cell>>,
}

/// Describes the workbook for a dataset.
///
/// The objectives sheet is always present and lists every resolved objective. The key
/// results sheet is added for detailed reports and the team performance sheet for summary
/// and detailed reports.
pub fn build_workbook(dataset: &ReportDataset) -> Vec<Sheet> {
    let report_type = dataset.filters.report_type;
    let mut sheets = vec![objectives_sheet(dataset)];

    if report_type.includes_key_results() {
        sheets.push(key_results_sheet(dataset));
    }

    if report_type.includes_team_performance() {
        sheets.push(team_performance_sheet(dataset));
    }

    sheets
}

fn objectives_sheet(dataset: &ReportDataset) -> Sheet {
    let header_block = vec![
        vec![Cell::text(format!("{} - OKR Report", dataset.company_name))],
        vec![Cell::text("Time Period:"), Cell::text(&dataset.filters.time_period)],
        vec![
            Cell::text("Report Type:"),
            Cell::text(dataset.filters.report_type.as_str()),
        ],
        vec![Cell::text("Team:"), Cell::text(&dataset.team_name)],
    ];

    let rows = dataset
        .objectives
        .iter()
        .map(|entry| {
            let objective = &entry.objective;
            vec![
                Cell::Number(f64::from(objective.id)),
                Cell::text(&objective.title),
                Cell::text(objective.description.as_deref().unwrap_or_default()),
                Cell::Number(f64::from(progress_percent(objective.progress))),
                Cell::text(display_status(objective.status.as_deref())),
                Cell::text(format_date(objective, DateField::Start)),
                Cell::text(format_date(objective, DateField::End)),
                Cell::text(dataset.owners.display_name(objective.owner_id)),
            ]
        })
        .collect();

    Sheet {
        name: OBJECTIVES_SHEET,
        header_block,
        columns: &OBJECTIVE_COLUMNS,
        rows,
    }
}

fn key_results_sheet(dataset: &ReportDataset) -> Sheet {
    let optional_value = |value: Option<f64>| match value {
        Some(value) => Cell::Number(value),
        None => Cell::text(NOT_SET),
    };

    let rows = dataset
        .objectives
        .iter()
        .flat_map(|entry| {
            entry.key_results.iter().map(move |key_result| {
                vec![
                    Cell::Number(f64::from(entry.objective.id)),
                    Cell::text(&entry.objective.title),
                    Cell::Number(f64::from(key_result.id)),
                    Cell::text(&key_result.title),
                    Cell::Number(f64::from(progress_percent(key_result.progress))),
                    optional_value(key_result.target_value),
                    optional_value(key_result.current_value),
                    Cell::text(dataset.owners.display_name(key_result.owner_id)),
                ]
            })
        })
        .collect();

    Sheet {
        name: KEY_RESULTS_SHEET,
        header_block: Vec::new(),
        columns: &KEY_RESULT_COLUMNS,
        rows,
    }
}

fn team_performance_sheet(dataset: &ReportDataset) -> Sheet {
    let rows = dataset
        .team_performance
        .iter()
        .map(|team| {
            vec![
                Cell::text(&team.team_name),
                Cell::count(team.objective_count),
                Cell::count(team.completed_count),
                Cell::count(team.at_risk_count),
                Cell::Number(f64::from(team.avg_progress)),
            ]
        })
        .collect();

    Sheet {
        name: TEAM_PERFORMANCE_SHEET,
        header_block: Vec::new(),
        columns: &TEAM_PERFORMANCE_COLUMNS,
        rows,
    }
}

enum DateField {
    Start,
    End,
}

fn format_date(objective: &ObjectiveModel, field: DateField) -> String {
    let date = match field {
        DateField::Start => objective.start_date,
        DateField::End => objective.end_date,
    };

    date.format("%Y-%m-%d").to_string()
}

/// Renders sheets into an `.xlsx` document.
///
/// Returns [`ReportError::Cancelled`] if `cancel` fires between sheets.
pub fn render_workbook(sheets: &[Sheet], cancel: &CancellationToken) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9E1F2))
        .set_border(FormatBorder::Thin);

    for sheet in sheets {
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled.into());
        }

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;

        let mut row: u32 = 0;
        for (index, line) in sheet.header_block.iter().enumerate() {
            let format = (index == 0).then_some(&title_format);
            for (col, cell) in (0u16..).zip(line) {
                write_cell(worksheet, row, col, cell, format)?;
            }
            row += 1;
        }
        if !sheet.header_block.is_empty() {
            row += 1;
        }

        for (col, column) in (0u16..).zip(sheet.columns) {
            worksheet.write_string_with_format(row, col, column.header, &header_format)?;
            worksheet.set_column_width(col, column.width)?;
        }
        row += 1;

        for line in &sheet.rows {
            for (col, cell) in (0u16..).zip(line) {
                write_cell(worksheet, row, col, cell, None)?;
            }
            row += 1;
        }
    }

    if cancel.is_cancelled() {
        return Err(ReportError::Cancelled.into());
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<(), XlsxError> {
    match (cell, format) {
        (Cell::Text(value), Some(format)) => {
            worksheet.write_string_with_format(row, col, value, format)?
        }
        (Cell::Text(value), None) => worksheet.write_string(row, col, value)?,
        (Cell::Number(value), Some(format)) => {
            worksheet.write_number_with_format(row, col, *value, format)?
        }
        (Cell::Number(value), None) => worksheet.write_number(row, col, *value)?,
    };

    Ok(())
}
