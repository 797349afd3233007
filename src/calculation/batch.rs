//! Batch payroll runs.
//!
//! A batch applies the normalizer and the payslip calculator to every row
//! of an uploaded sheet. Output order always matches input order and each
//! row's fallbacks use its own 1-based position. No row can fail a batch.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StatutoryConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayrollRun, PayrollTotals, Payslip, RawRow, format_peso,
};

use super::normalizer::normalize_row;
use super::payslip::{calculate_payslip, compute_payslip, compute_payslip_with};

/// Options for a payroll run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Record every calculation step for every row.
    pub explain: bool,
}

/// Computes one payslip per row under the built-in schedule.
///
/// This is the bare order-preserving mapping with no run metadata.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::compute_batch;
/// use prominent_payroll::models::RawRow;
///
/// let rows = vec![
///     RawRow::new().with("Name", "Juan Luna").with("Salary", 20000.0),
///     RawRow::new(),
/// ];
/// let payslips = compute_batch(&rows);
///
/// assert_eq!(payslips.len(), 2);
/// assert_eq!(payslips[0].figures.net_pay, 18400.0);
/// assert_eq!(payslips[1].id, "EMP-002");
/// ```
pub fn compute_batch(rows: &[RawRow]) -> Vec<Payslip> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let normalized = normalize_row(row, index + 1);
            let figures = compute_payslip(normalized.employee.basic_salary);
            Payslip::new(normalized.employee, figures)
        })
        .collect()
}

/// Runs payroll over `rows` and returns payslips, totals and an audit trace.
pub fn run_payroll(rows: &[RawRow], config: &StatutoryConfig, options: RunOptions) -> PayrollRun {
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();

    let mut payslips = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    for (index, row) in rows.iter().enumerate() {
        let position = index + 1;
        let normalized = normalize_row(row, position);

        for issue in &normalized.issues {
            debug!(
                run_id = %run_id,
                row = position,
                code = issue.code(),
                "Row fallback applied"
            );
            warnings.push(AuditWarning {
                code: issue.code().to_string(),
                message: issue.describe(),
                severity: issue.severity().to_string(),
                row: position,
            });
        }

        let figures = if options.explain {
            let calculation =
                calculate_payslip(config, normalized.employee.basic_salary, step_number);
            step_number += calculation.audit_steps.len() as u32;
            steps.extend(calculation.audit_steps.into_iter().map(|mut step| {
                step.row = Some(position);
                step
            }));
            calculation.figures
        } else {
            compute_payslip_with(config, normalized.employee.basic_salary)
        };

        payslips.push(Payslip::new(normalized.employee, figures));
    }

    let totals = PayrollTotals::from_payslips(&payslips);
    if totals.is_saturated() {
        warn!(run_id = %run_id, totals = ?totals.saturated, "Run totals out of range");
        warnings.push(AuditWarning {
            code: "TOTALS_OVERFLOW".to_string(),
            message: format!(
                "{} exceeded the representable range and {} pinned at the maximum",
                totals.saturated.join(", "),
                if totals.saturated.len() == 1 { "was" } else { "were" }
            ),
            severity: "high".to_string(),
            row: 0,
        });
    }
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        run_id = %run_id,
        rows = rows.len(),
        warnings = warnings.len(),
        net_pay = %format_peso(totals.net_pay),
        duration_us,
        "Payroll run completed"
    );

    PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule: config.metadata().code.clone(),
        payslips,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
