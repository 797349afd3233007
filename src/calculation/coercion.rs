//! Salary coercion from loosely-typed cells.
//!
//! All fallback logic for turning a spreadsheet cell into a salary lives
//! here, so the payslip calculator only ever sees finite, non-negative
//! numbers.

use crate::models::{CellValue, RowIssue};

/// Parses the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped. An optional sign, integer digits, a
/// fractional part and an exponent are accepted; anything after the number
/// is ignored. `Infinity` (optionally signed) is recognised. Returns `None`
/// when no digits are found.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::parse_leading_number;
///
/// assert_eq!(parse_leading_number("  25000.50 PHP"), Some(25000.5));
/// assert_eq!(parse_leading_number("1,500"), Some(1.0));
/// assert_eq!(parse_leading_number("-3e2x"), Some(-300.0));
/// assert_eq!(parse_leading_number("PHP 25000"), None);
/// ```
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Coerces a salary cell to a finite, non-negative number.
///
/// Returns the salary, or the [`RowIssue`] explaining why it could not be
/// used. Callers substitute zero on error; rows are never rejected.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::coerce_salary;
/// use prominent_payroll::models::{CellValue, RowIssue};
///
/// assert_eq!(coerce_salary(Some(&CellValue::Text("32000".into()))), Ok(32000.0));
/// assert_eq!(coerce_salary(None), Err(RowIssue::MissingSalary));
/// ```
pub fn coerce_salary(cell: Option<&CellValue>) -> Result<f64, RowIssue> {
    let (value, raw) = match cell {
        None | Some(CellValue::Empty) => return Err(RowIssue::MissingSalary),
        Some(number @ CellValue::Number(n)) => (*n, number.to_text()),
        Some(CellValue::Text(s)) => match parse_leading_number(s) {
            Some(n) => (n, s.clone()),
            None => return Err(RowIssue::UnparseableSalary { raw: s.clone() }),
        },
        Some(other @ CellValue::Bool(_)) => {
            return Err(RowIssue::UnparseableSalary {
                raw: other.to_text(),
            });
        }
    };

    if value.is_nan() {
        Err(RowIssue::UnparseableSalary { raw })
    } else if value.is_infinite() {
        Err(RowIssue::NonFiniteSalary { raw })
    } else if value < 0.0 {
        Err(RowIssue::NegativeSalary { value })
    } else if value == 0.0 {
        // Folds -0.0 into 0.0.
        Ok(0.0)
    } else {
        Ok(value)
    }
}

/// Coerces a salary cell, substituting zero on failure.
///
/// The issue, if any, is returned alongside so it can be reported.
pub fn salary_or_zero(cell: Option<&CellValue>) -> (f64, Option<RowIssue>) {
    match coerce_salary(cell) {
        Ok(salary) => (salary, None),
        Err(issue) => (0.0, Some(issue)),
    }
}
