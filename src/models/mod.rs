//! Core data models for the payroll engine.
//!
//! This module contains the loosely-typed spreadsheet row shape that enters
//! the engine, the normalized employee record, the payslip that leaves it,
//! and the run-level totals and audit trace.

mod employee;
mod money;
mod payroll_run;
mod payslip;
mod row;

pub use employee::{EmployeeRecord, RowIssue};
pub use money::{centavo_text, centavos, format_peso};
pub use payroll_run::{AuditStep, AuditTrace, AuditWarning, PayrollRun, PayrollTotals};
pub use payslip::{Payslip, PayslipFigures, TaxStatus};
pub use row::{CellValue, RawRow};
