//! Payroll register export.

use std::io::Write;

use serde::Serialize;

use crate::error::PayrollResult;
use crate::models::{Payslip, centavo_text};

use super::template::export_error;

/// Column headers of the payroll register.
pub const REGISTER_HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Basic Salary",
    "SSS",
    "Pag-IBIG",
    "PhilHealth",
    "Taxable Income",
    "Withholding Tax",
    "Net Pay",
    "Tax Status",
];

#[derive(Serialize)]
struct RegisterLine<'a> {
    id: &'a str,
    name: &'a str,
    basic_salary: String,
    sss: String,
    pag_ibig: String,
    phil_health: String,
    taxable_income: String,
    withholding_tax: String,
    net_pay: String,
    tax_status: &'static str,
}

impl<'a> From<&'a Payslip> for RegisterLine<'a> {
    fn from(payslip: &'a Payslip) -> Self {
        let f = &payslip.figures;
        Self {
            id: &payslip.id,
            name: &payslip.name,
            basic_salary: centavo_text(f.basic_salary),
            sss: centavo_text(f.sss),
            pag_ibig: centavo_text(f.pag_ibig),
            phil_health: centavo_text(f.phil_health),
            taxable_income: centavo_text(f.taxable_income),
            withholding_tax: centavo_text(f.withholding_tax),
            net_pay: centavo_text(f.net_pay),
            tax_status: f.tax_status.label(),
        }
    }
}

/// Writes one register line per payslip, in payslip order, with every
/// figure rounded to centavos. Figures too large for a `Decimal` are written
/// from their `f64` value.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::compute_batch;
/// use prominent_payroll::models::RawRow;
/// use prominent_payroll::sheet::write_register_csv;
///
/// let payslips = compute_batch(&[RawRow::new().with("ID", "E1").with("Salary", 20000.0)]);
/// let mut out = Vec::new();
/// write_register_csv(&payslips, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.lines().nth(1).unwrap().starts_with("E1,Employee 1,20000.00,900.00"));
/// ```
pub fn write_register_csv<W: Write>(payslips: &[Payslip], writer: W) -> PayrollResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REGISTER_HEADERS).map_err(export_error)?;
    for payslip in payslips {
        wtr.serialize(RegisterLine::from(payslip))
            .map_err(export_error)?;
    }
    wtr.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_batch;
    use crate::models::RawRow;

    fn register_text(rows: &[RawRow]) -> String {
        let payslips = compute_batch(rows);
        let mut out = Vec::new();
        write_register_csv(&payslips, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_register_header() {
        let text = register_text(&[]);
        assert_eq!(
            text,
            "ID,Name,Basic Salary,SSS,Pag-IBIG,PhilHealth,Taxable Income,Withholding Tax,Net Pay,Tax Status\n"
        );
    }

    /// Scenario B as a register line
    #[test]
    fn test_register_line_is_rounded_to_centavos() {
        let text = register_text(&[RawRow::new()
            .with("ID", "EMP002")
            .with("Name", "Maria Clara")
            .with("Salary", 50000.0)]);

        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "EMP002,Maria Clara,50000.00,1350.00,200.00,1250.00,47200.00,4648.40,42551.60,Calculated via TRAIN brackets"
        );
    }

    #[test]
    fn test_register_keeps_row_order_and_fallbacks() {
        let text = register_text(&[
            RawRow::new().with("Name", "Diego Silang").with("Salary", 20000.0),
            RawRow::new(),
        ]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("EMP-001,Diego Silang,20000.00"));
        assert!(lines[1].ends_with("Tax Exempt (<₱250k/yr)"));
        assert!(lines[2].starts_with("EMP-002,Employee 2,0.00"));
    }

    #[test]
    fn test_register_quotes_names_with_commas() {
        let text = register_text(&[RawRow::new()
            .with("ID", "X")
            .with("Name", "Luna, Juan")
            .with("Salary", 30000.0)]);
        assert!(text.lines().nth(1).unwrap().starts_with("X,\"Luna, Juan\","));
    }

    #[test]
    fn test_register_writes_unrepresentable_salary_from_f64() {
        let text = register_text(&[RawRow::new()
            .with("ID", "BIG")
            .with("Name", "Huge Salary")
            .with("Salary", 1e30)]);

        let line = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[0], "BIG");
        assert_ne!(fields[2], "0.00");
        assert!(fields[2].starts_with("1000000000000000"));
        assert!(fields[2].ends_with(".00"));
        let basic: f64 = fields[2].parse().unwrap();
        assert_eq!(basic, 1e30);
        assert_ne!(fields[8], "0.00");
    }
}
