//! Row normalization.
//!
//! This module turns one loosely-typed spreadsheet row into an
//! [`EmployeeRecord`]. Each field is looked up through an ordered list of
//! candidate column headers; the first filled-in cell wins. Missing or
//! unusable values fall back to defaults derived from the row's position.

use crate::models::{CellValue, EmployeeRecord, RawRow, RowIssue};

use super::coercion::salary_or_zero;

/// Column headers tried, in order, for the basic salary.
pub const SALARY_KEYS: [&str; 3] = ["Salary", "salary", "Basic Salary"];

/// Column headers tried, in order, for the employee identifier.
pub const ID_KEYS: [&str; 2] = ["ID", "id"];

/// Column headers tried, in order, for the employee name.
pub const NAME_KEYS: [&str; 2] = ["Name", "name"];

/// Prefix of synthesized employee identifiers.
pub const FALLBACK_ID_PREFIX: &str = "EMP-";

/// The outcome of normalizing one row.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    /// The extracted employee.
    pub employee: EmployeeRecord,
    /// Every fallback that was taken, in field order (id, name, salary).
    pub issues: Vec<RowIssue>,
}

/// Returns the first filled-in cell among `keys`, in priority order.
///
/// Cells that are empty, zero or `false` are skipped.
pub fn first_filled<'a>(row: &'a RawRow, keys: &[&str]) -> Option<&'a CellValue> {
    keys.iter()
        .filter_map(|key| row.get(key))
        .find(|cell| cell.is_truthy())
}

/// Identifier synthesized for the row at 1-based `position`.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::fallback_id;
///
/// assert_eq!(fallback_id(1), "EMP-001");
/// assert_eq!(fallback_id(1234), "EMP-1234");
/// ```
pub fn fallback_id(position: usize) -> String {
    format!("{FALLBACK_ID_PREFIX}{position:03}")
}

/// Name synthesized for the row at 1-based `position`.
pub fn fallback_name(position: usize) -> String {
    format!("Employee {position}")
}

/// Normalizes the row at 1-based `position` within its batch.
///
/// Never fails: in the worst case every field takes its fallback value
/// and the salary is zero.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::normalize_row;
/// use prominent_payroll::models::RawRow;
///
/// let row = RawRow::new().with("name", "Gabriela Silang").with("Basic Salary", "28000");
/// let normalized = normalize_row(&row, 2);
///
/// assert_eq!(normalized.employee.id, "EMP-002");
/// assert_eq!(normalized.employee.name, "Gabriela Silang");
/// assert_eq!(normalized.employee.basic_salary, 28000.0);
/// ```
pub fn normalize_row(row: &RawRow, position: usize) -> NormalizedRow {
    let mut issues = Vec::new();

    let id = match first_filled(row, &ID_KEYS) {
        Some(cell) => cell.to_text(),
        None => {
            issues.push(RowIssue::GeneratedId);
            fallback_id(position)
        }
    };

    let name = match first_filled(row, &NAME_KEYS) {
        Some(cell) => cell.to_text(),
        None => {
            issues.push(RowIssue::GeneratedName);
            fallback_name(position)
        }
    };

    let (basic_salary, salary_issue) = salary_or_zero(first_filled(row, &SALARY_KEYS));
    issues.extend(salary_issue);

    NormalizedRow {
        employee: EmployeeRecord {
            id,
            name,
            basic_salary,
        },
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_keys_are_used() {
        let row = RawRow::new()
            .with("ID", "EMP001")
            .with("Name", "Juan Dela Cruz")
            .with("Salary", 25000.0);

        let normalized = normalize_row(&row, 1);
        assert_eq!(normalized.employee.id, "EMP001");
        assert_eq!(normalized.employee.name, "Juan Dela Cruz");
        assert_eq!(normalized.employee.basic_salary, 25000.0);
        assert!(normalized.issues.is_empty());
    }

    #[test]
    fn test_salary_key_priority() {
        let row = RawRow::new()
            .with("Salary", 1000.0)
            .with("salary", 2000.0)
            .with("Basic Salary", 3000.0);
        assert_eq!(normalize_row(&row, 1).employee.basic_salary, 1000.0);

        let row = RawRow::new()
            .with("salary", 2000.0)
            .with("Basic Salary", 3000.0);
        assert_eq!(normalize_row(&row, 1).employee.basic_salary, 2000.0);

        let row = RawRow::new().with("Basic Salary", 3000.0);
        assert_eq!(normalize_row(&row, 1).employee.basic_salary, 3000.0);
    }

    #[test]
    fn test_empty_and_zero_cells_fall_through_to_next_key() {
        let row = RawRow::new()
            .with("Salary", "")
            .with("salary", 0.0)
            .with("Basic Salary", "41000");
        assert_eq!(normalize_row(&row, 1).employee.basic_salary, 41000.0);
    }

    #[test]
    fn test_unparseable_winner_does_not_fall_through() {
        let row = RawRow::new()
            .with("Salary", "n/a")
            .with("salary", 30000.0);

        let normalized = normalize_row(&row, 1);
        assert_eq!(normalized.employee.basic_salary, 0.0);
        assert_eq!(
            normalized.issues,
            vec![
                RowIssue::GeneratedId,
                RowIssue::GeneratedName,
                RowIssue::UnparseableSalary {
                    raw: "n/a".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_lowercase_identity_keys() {
        let row = RawRow::new()
            .with("id", "X-7")
            .with("name", "Lapu-Lapu")
            .with("salary", 20000.0);

        let normalized = normalize_row(&row, 9);
        assert_eq!(normalized.employee.id, "X-7");
        assert_eq!(normalized.employee.name, "Lapu-Lapu");
    }

    #[test]
    fn test_numeric_identifier_renders_as_integer() {
        let row = RawRow::new().with("ID", 1042.0).with("Salary", 1.0);
        assert_eq!(normalize_row(&row, 1).employee.id, "1042");
    }

    #[test]
    fn test_empty_row_takes_every_fallback() {
        let normalized = normalize_row(&RawRow::new(), 3);

        assert_eq!(normalized.employee.id, "EMP-003");
        assert_eq!(normalized.employee.name, "Employee 3");
        assert_eq!(normalized.employee.basic_salary, 0.0);
        assert_eq!(
            normalized.issues,
            vec![
                RowIssue::GeneratedId,
                RowIssue::GeneratedName,
                RowIssue::MissingSalary,
            ]
        );
    }

    #[test]
    fn test_unrelated_columns_are_ignored() {
        let row = RawRow::new()
            .with("Employee Name", "Apolinario Mabini")
            .with("Monthly Pay", 55000.0);

        let normalized = normalize_row(&row, 12);
        assert_eq!(normalized.employee.id, "EMP-012");
        assert_eq!(normalized.employee.name, "Employee 12");
        assert_eq!(normalized.employee.basic_salary, 0.0);
    }

    #[test]
    fn test_negative_salary_is_clamped() {
        let row = RawRow::new().with("Salary", -1500.0);
        let normalized = normalize_row(&row, 1);
        assert_eq!(normalized.employee.basic_salary, 0.0);
        assert!(
            normalized
                .issues
                .contains(&RowIssue::NegativeSalary { value: -1500.0 })
        );
    }

    #[test]
    fn test_fallback_id_padding() {
        assert_eq!(fallback_id(7), "EMP-007");
        assert_eq!(fallback_id(45), "EMP-045");
        assert_eq!(fallback_id(999), "EMP-999");
        assert_eq!(fallback_id(1000), "EMP-1000");
    }
}
