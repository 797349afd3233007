//! Normalized employee record.
//!
//! This module defines the [`EmployeeRecord`] produced by the row
//! normalizer and the [`RowIssue`]s recorded whenever a field had to fall
//! back to a default.

use serde::{Deserialize, Serialize};

/// An employee extracted from one spreadsheet row.
///
/// `basic_salary` is always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier, either from the sheet or synthesized from the
    /// row position (e.g., "EMP-001").
    pub id: String,
    /// Display name, either from the sheet or "Employee <n>".
    pub name: String,
    /// Gross monthly salary before deductions.
    pub basic_salary: f64,
}

/// A fallback taken while normalizing a row.
///
/// Issues never stop a row from being processed; they are surfaced as
/// run warnings so the uploader can fix the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    /// None of the salary columns held a value.
    MissingSalary,
    /// The salary cell held something that is not a number.
    UnparseableSalary {
        /// The cell content as text.
        raw: String,
    },
    /// The salary parsed to infinity.
    NonFiniteSalary {
        /// The cell content as text.
        raw: String,
    },
    /// The salary was negative and was clamped to zero.
    NegativeSalary {
        /// The parsed value before clamping.
        value: f64,
    },
    /// No identifier column held a value.
    GeneratedId,
    /// No name column held a value.
    GeneratedName,
}

impl RowIssue {
    /// Returns the warning code for this issue.
    pub fn code(&self) -> &'static str {
        match self {
            RowIssue::MissingSalary => "SALARY_MISSING",
            RowIssue::UnparseableSalary { .. } => "SALARY_UNPARSEABLE",
            RowIssue::NonFiniteSalary { .. } => "SALARY_NOT_FINITE",
            RowIssue::NegativeSalary { .. } => "SALARY_NEGATIVE",
            RowIssue::GeneratedId => "ID_GENERATED",
            RowIssue::GeneratedName => "NAME_GENERATED",
        }
    }

    /// Returns the severity of the issue.
    ///
    /// Salary problems zero out a payslip and are "medium"; synthesized
    /// identity fields are cosmetic and "low".
    pub fn severity(&self) -> &'static str {
        match self {
            RowIssue::GeneratedId | RowIssue::GeneratedName => "low",
            _ => "medium",
        }
    }

    /// Returns a human-readable description of the issue.
    pub fn describe(&self) -> String {
        match self {
            RowIssue::MissingSalary => {
                "No Salary, salary or Basic Salary value; salary set to 0".to_string()
            }
            RowIssue::UnparseableSalary { raw } => {
                format!("Salary '{raw}' is not a number; salary set to 0")
            }
            RowIssue::NonFiniteSalary { raw } => {
                format!("Salary '{raw}' is not finite; salary set to 0")
            }
            RowIssue::NegativeSalary { value } => {
                format!("Salary {value} is negative; salary set to 0")
            }
            RowIssue::GeneratedId => "No ID value; identifier generated".to_string(),
            RowIssue::GeneratedName => "No Name value; placeholder name used".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_record() {
        let json = r#"{"id": "EMP001", "name": "Juan Luna", "basic_salary": 45000.0}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "EMP001");
        assert_eq!(record.name, "Juan Luna");
        assert_eq!(record.basic_salary, 45000.0);
    }

    #[test]
    fn test_issue_codes_are_distinct() {
        let issues = [
            RowIssue::MissingSalary,
            RowIssue::UnparseableSalary { raw: "x".into() },
            RowIssue::NonFiniteSalary { raw: "Infinity".into() },
            RowIssue::NegativeSalary { value: -1.0 },
            RowIssue::GeneratedId,
            RowIssue::GeneratedName,
        ];
        let mut codes: Vec<_> = issues.iter().map(RowIssue::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), issues.len());
    }

    #[test]
    fn test_salary_issues_are_medium_severity() {
        assert_eq!(RowIssue::MissingSalary.severity(), "medium");
        assert_eq!(RowIssue::NegativeSalary { value: -5.0 }.severity(), "medium");
        assert_eq!(RowIssue::GeneratedName.severity(), "low");
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = RowIssue::UnparseableSalary {
            raw: "n/a".to_string(),
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert_eq!(json, r#"{"kind":"unparseable_salary","raw":"n/a"}"#);
    }

    #[test]
    fn test_describe_mentions_raw_value() {
        let issue = RowIssue::UnparseableSalary {
            raw: "TBD".to_string(),
        };
        assert!(issue.describe().contains("'TBD'"));
    }
}
