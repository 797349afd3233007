//! Spreadsheet ingest and export.
//!
//! Uploaded employee sheets (CSV or workbook) are read into [`RawRow`]s for
//! the normalizer. In the other direction this module writes the sample
//! roster offered as an upload template and the payroll register for a
//! computed run.
//!
//! [`RawRow`]: crate::models::RawRow

mod reader;
mod register;
mod template;

pub use reader::{read_csv_file, read_csv_rows, read_rows, read_sheet_bytes, read_xlsx_rows};
pub use register::{REGISTER_HEADERS, write_register_csv};
pub use template::{MIN_SAMPLE_SALARY, RosterEntry, SAMPLE_NAMES, sample_roster, write_roster_csv};
