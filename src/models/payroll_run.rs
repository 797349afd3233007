//! Payroll run models for the payroll engine.
//!
//! This module contains the [`PayrollRun`] type returned by the batch
//! driver, with the run totals and an audit trace that records every
//! fallback taken while reading the sheet.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Payslip, centavos};

/// Aggregated totals for a payroll run.
///
/// Each payslip figure is rounded to centavos before it is summed, so the
/// totals agree with a printed register. A total that would leave the
/// `Decimal` range is pinned at `Decimal::MAX` and named in `saturated`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of payslips in the run.
    pub headcount: usize,
    /// Total basic salary.
    pub basic_salary: Decimal,
    /// Total SSS contributions.
    pub sss: Decimal,
    /// Total Pag-IBIG contributions.
    pub pag_ibig: Decimal,
    /// Total PhilHealth contributions.
    pub phil_health: Decimal,
    /// Total taxable income.
    pub taxable_income: Decimal,
    /// Total withholding tax.
    pub withholding_tax: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
    /// Names of the totals pinned at `Decimal::MAX`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub saturated: Vec<String>,
}

impl PayrollTotals {
    /// Sums the given payslips.
    ///
    /// # Example
    ///
    /// ```
    /// use prominent_payroll::models::PayrollTotals;
    ///
    /// let totals = PayrollTotals::from_payslips(&[]);
    /// assert_eq!(totals.headcount, 0);
    /// assert!(totals.net_pay.is_zero());
    /// ```
    pub fn from_payslips(payslips: &[Payslip]) -> Self {
        let mut sums = [Some(Decimal::ZERO); 7];
        for payslip in payslips {
            let f = &payslip.figures;
            let amounts = [
                f.basic_salary,
                f.sss,
                f.pag_ibig,
                f.phil_health,
                f.taxable_income,
                f.withholding_tax,
                f.net_pay,
            ];
            for (sum, amount) in sums.iter_mut().zip(amounts) {
                *sum = sum.and_then(|total| total.checked_add(centavos(amount)?));
            }
        }

        let saturated = TOTAL_NAMES
            .iter()
            .zip(&sums)
            .filter(|(_, sum)| sum.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        let [basic_salary, sss, pag_ibig, phil_health, taxable_income, withholding_tax, net_pay] =
            sums.map(|sum| sum.unwrap_or(Decimal::MAX));

        PayrollTotals {
            headcount: payslips.len(),
            basic_salary,
            sss,
            pag_ibig,
            phil_health,
            taxable_income,
            withholding_tax,
            net_pay,
            saturated,
        }
    }

    /// Returns `true` when any total was pinned at `Decimal::MAX`.
    pub fn is_saturated(&self) -> bool {
        !self.saturated.is_empty()
    }
}

const TOTAL_NAMES: [&str; 7] = [
    "basic_salary",
    "sss",
    "pag_ibig",
    "phil_health",
    "taxable_income",
    "withholding_tax",
    "net_pay",
];

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The 1-based sheet row the step belongs to, when run in a batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute the rule comes from.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while reading a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
    /// The 1-based sheet row the warning refers to, or 0 for the whole run.
    pub row: usize,
}

/// The complete audit trace for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Per-row calculation steps; empty unless an explanation was requested.
    pub steps: Vec<AuditStep>,
    /// Fallbacks taken while normalizing rows.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The result of running payroll over one uploaded sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The statutory schedule the run used.
    pub schedule: String,
    /// One payslip per input row, in input order.
    pub payslips: Vec<Payslip>,
    /// Totals across all payslips.
    pub totals: PayrollTotals,
    /// Warnings and optional per-row steps.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRecord, PayslipFigures, TaxStatus};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payslip(id: &str, basic: f64, tax: f64, net: f64) -> Payslip {
        Payslip::new(
            EmployeeRecord {
                id: id.to_string(),
                name: format!("Employee {id}"),
                basic_salary: basic,
            },
            PayslipFigures {
                basic_salary: basic,
                sss: 0.0,
                pag_ibig: 200.0,
                phil_health: 0.0,
                taxable_income: basic - 200.0,
                withholding_tax: tax,
                net_pay: net,
                tax_status: TaxStatus::Bracketed,
            },
        )
    }

    #[test]
    fn test_totals_sum_rounded_figures() {
        let payslips = vec![
            payslip("1", 1000.0, 0.004, 799.996),
            payslip("2", 2000.0, 0.004, 1799.996),
        ];

        let totals = PayrollTotals::from_payslips(&payslips);
        assert_eq!(totals.headcount, 2);
        assert_eq!(totals.basic_salary, dec("3000.00"));
        assert_eq!(totals.pag_ibig, dec("400.00"));
        // Each 0.004 rounds to 0.00 before summing.
        assert_eq!(totals.withholding_tax, dec("0.00"));
        assert_eq!(totals.net_pay, dec("2600.00"));
    }

    #[test]
    fn test_totals_pin_at_max_instead_of_overflowing() {
        let payslips: Vec<Payslip> = (1..=3)
            .map(|i| payslip(&i.to_string(), 5e28, 0.0, 5e28))
            .collect();

        let totals = PayrollTotals::from_payslips(&payslips);
        assert_eq!(totals.headcount, 3);
        assert_eq!(totals.basic_salary, Decimal::MAX);
        assert_eq!(totals.net_pay, Decimal::MAX);
        assert_eq!(totals.pag_ibig, dec("600.00"));
        assert!(totals.is_saturated());
        assert!(totals.saturated.contains(&"basic_salary".to_string()));
        assert!(!totals.saturated.contains(&"pag_ibig".to_string()));
    }

    #[test]
    fn test_totals_pin_unrepresentable_figure() {
        let totals = PayrollTotals::from_payslips(&[payslip("1", 1e30, 0.0, 1e30)]);
        assert_eq!(totals.basic_salary, Decimal::MAX);
        assert_ne!(totals.basic_salary, Decimal::ZERO);
        assert_eq!(totals.saturated, vec!["basic_salary", "taxable_income", "net_pay"]);
    }

    #[test]
    fn test_totals_serialize_as_strings() {
        let totals = PayrollTotals::from_payslips(&[payslip("1", 1000.0, 0.0, 800.0)]);
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["headcount"], 1);
        assert_eq!(json["net_pay"], "800.00");
        assert!(json.get("saturated").is_none());
    }

    #[test]
    fn test_audit_step_omits_row_when_absent() {
        let step = AuditStep {
            step_number: 1,
            row: None,
            rule_id: "sss_contribution".to_string(),
            rule_name: "SSS Contribution".to_string(),
            legal_ref: "RA 11199".to_string(),
            input: serde_json::json!({"basic_salary": 20000.0}),
            output: serde_json::json!({"sss": 900.0}),
            reasoning: "20000 x 0.045 = 900".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"legal_ref\":\"RA 11199\""));
        assert!(!json.contains("\"row\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "SALARY_MISSING".to_string(),
            message: "salary set to 0".to_string(),
            severity: "medium".to_string(),
            row: 3,
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"SALARY_MISSING\""));
        assert!(json.contains("\"row\":3"));
    }

    #[test]
    fn test_payroll_run_round_trips_through_json() {
        let run = PayrollRun {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            schedule: "PH-TRAIN-2023".to_string(),
            payslips: vec![payslip("1", 1000.0, 0.0, 800.0)],
            totals: PayrollTotals::default(),
            audit_trace: AuditTrace::default(),
        };

        let json = serde_json::to_string(&run).unwrap();
        let parsed: PayrollRun = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.run_id, run.run_id);
        assert_eq!(parsed.payslips, run.payslips);
    }
}
