//! Spreadsheet readers.
//!
//! CSV and workbook files are turned into [`RawRow`]s the way a generic
//! sheet-to-records conversion does it: the first row holds the headers,
//! every later row becomes a map from header to cell, empty cells are
//! left out and fully blank rows are skipped. Blank headers become
//! `__EMPTY` and repeated headers get a `_1`, `_2`, ... suffix.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{CellValue, RawRow};

/// Reads rows from CSV text. Every non-empty cell becomes [`CellValue::Text`].
///
/// # Example
///
/// ```
/// use prominent_payroll::sheet::read_csv_rows;
/// use prominent_payroll::models::CellValue;
///
/// let csv = "ID,Name,Salary\nEMP001,Juan Luna,25000\n";
/// let rows = read_csv_rows(csv.as_bytes()).unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("Salary"), Some(&CellValue::Text("25000".to_string())));
/// ```
pub fn read_csv_rows<R: Read>(reader: R) -> PayrollResult<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = Vec::new();
    for result in rdr.records() {
        let record = result?;
        grid.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect::<Vec<_>>(),
        );
    }

    Ok(rows_from_grid(grid))
}

/// Reads rows from a CSV file.
pub fn read_csv_file(path: &Path) -> PayrollResult<Vec<RawRow>> {
    let file = std::fs::File::open(path).map_err(|e| sheet_error(path, e))?;
    read_csv_rows(std::io::BufReader::new(file)).map_err(|e| match e {
        PayrollError::SheetRead { message, .. } => PayrollError::SheetRead {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })
}

/// Reads rows from the first worksheet of a workbook (xlsx, xlsm, xlsb,
/// xls or ods).
pub fn read_xlsx_rows(path: &Path) -> PayrollResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| sheet_error(path, e))?;
    first_sheet_rows(&mut workbook, path)
}

/// Reads rows from an uploaded sheet held in memory.
///
/// Zip (xlsx, xlsm, xlsb, ods) and OLE (xls) signatures are read as a
/// workbook. Anything else is read as CSV.
///
/// # Example
///
/// ```
/// use prominent_payroll::sheet::read_sheet_bytes;
///
/// let rows = read_sheet_bytes(b"Name,Salary\nJuan Luna,30000\n").unwrap();
/// assert_eq!(rows.len(), 1);
///
/// assert!(read_sheet_bytes(b"PK\x03\x04 truncated").is_err());
/// ```
pub fn read_sheet_bytes(bytes: &[u8]) -> PayrollResult<Vec<RawRow>> {
    let source = Path::new(UPLOAD_SOURCE);
    if is_workbook(bytes) {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| sheet_error(source, e))?;
        first_sheet_rows(&mut workbook, source)
    } else {
        read_csv_rows(bytes)
    }
}

const UPLOAD_SOURCE: &str = "<upload>";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

fn is_workbook(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC)
}

fn first_sheet_rows<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    source: &Path,
) -> PayrollResult<Vec<RawRow>> {
    let Some(first_sheet) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| sheet_error(source, e))?;

    debug!(
        path = %source.display(),
        sheet = %first_sheet,
        height = range.height(),
        "Reading worksheet"
    );

    let grid = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>());
    Ok(rows_from_grid(grid))
}

/// Reads rows from a spreadsheet, choosing the reader by file extension.
pub fn read_rows(path: &Path) -> PayrollResult<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => read_csv_file(path),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => read_xlsx_rows(path),
        _ => Err(PayrollError::UnsupportedSheet {
            path: path.display().to_string(),
        }),
    }
}

fn sheet_error(path: &Path, error: impl std::fmt::Display) -> PayrollError {
    PayrollError::SheetRead {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Empty => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

/// Builds rows from a grid whose first line holds the headers.
fn rows_from_grid<I>(grid: I) -> Vec<RawRow>
where
    I: IntoIterator<Item = Vec<CellValue>>,
{
    let mut lines = grid.into_iter();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = unique_headers(header_line.iter().map(CellValue::to_text));

    lines
        .filter_map(|cells| {
            let row: RawRow = headers
                .iter()
                .zip(cells)
                .filter(|(_, cell)| *cell != CellValue::Empty)
                .map(|(header, cell)| (header.clone(), cell))
                .collect();
            (!row.is_empty()).then_some(row)
        })
        .collect()
}

fn unique_headers<I: IntoIterator<Item = String>>(raw: I) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .map(|header| {
            let base = if header.is_empty() {
                "__EMPTY".to_string()
            } else {
                header
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}_{count}")
            };
            *count += 1;
            name
        })
        .collect()
}
