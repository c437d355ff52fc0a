//! Row Extractor
//!
//! Turns an uploaded byte blob into ordered [`LeadRow`]s, one per data row,
//! preserving file order. Recognized formats are decided by the declared
//! file name's extension (`.csv`, `.xlsx`, `.xls`, case-insensitive); the
//! content is then parsed with the matching reader. Header names bind
//! columns case-insensitively and ignoring spaces and underscores, so
//! `FirstName`, `First Name` and `first_name` are all accepted. Beyond
//! being tabular, nothing is validated; absent or empty cells simply stay
//! absent in the row.

use super::types::LeadRow;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use regex::Regex;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file type `.{0}`. Only .csv, .xlsx, .xls files are allowed")]
    UnsupportedFormat(String),
    #[error("Failed to parse csv data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Workbook has no sheets")]
    EmptyWorkbook,
}

/// Extracts the ordered lead rows from an uploaded file.
pub fn extract_rows(file_name: &str, bytes: &[u8]) -> Result<Vec<LeadRow>, ParseError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or(file_name)
        .to_lowercase();

    if !is_supported_extension(&extension) {
        return Err(ParseError::UnsupportedFormat(extension));
    }

    match extension.as_str() {
        "csv" => extract_csv(bytes),
        _ => extract_workbook(bytes),
    }
}

fn is_supported_extension(extension: &str) -> bool {
    let re = Regex::new(r"^(csv|xlsx|xls)$").unwrap();
    re.is_match(extension)
}

/// Which lead field a sheet column feeds, decided from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    FirstName,
    Phone,
    Notes,
    Ignored,
}

fn classify_header(header: &str) -> Column {
    let normalized: String = header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    match normalized.as_str() {
        "firstname" => Column::FirstName,
        "phone" => Column::Phone,
        "notes" => Column::Notes,
        _ => Column::Ignored,
    }
}

fn extract_csv(bytes: &[u8]) -> Result<Vec<LeadRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<Column> = reader
        .headers()?
        .iter()
        .map(classify_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = LeadRow::default();
        for (column, value) in columns.iter().zip(record.iter()) {
            assign_field(&mut row, *column, non_empty(value));
        }
        rows.push(row);
    }

    Ok(rows)
}

fn extract_workbook(bytes: &[u8]) -> Result<Vec<LeadRow>, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::EmptyWorkbook)??;

    let mut sheet_rows = range.rows();
    let columns: Vec<Column> = match sheet_rows.next() {
        Some(headers) => headers
            .iter()
            .map(|cell| classify_header(&cell.to_string()))
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = LeadRow::default();
        for (column, cell) in columns.iter().zip(sheet_row.iter()) {
            assign_field(&mut row, *column, cell_to_string(cell));
        }
        rows.push(row);
    }

    Ok(rows)
}

fn assign_field(row: &mut LeadRow, column: Column, value: Option<String>) {
    match column {
        Column::FirstName => row.first_name = value,
        Column::Phone => row.phone = value,
        Column::Notes => row.notes = value,
        Column::Ignored => {}
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        // Spreadsheets store phone numbers as floats; render whole values
        // without the trailing `.0`.
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        other => non_empty(&other.to_string()),
    }
}
