//! Withholding tax calculation.
//!
//! Tax is progressive over the brackets of a [`TaxTable`]. Brackets are
//! checked in ascending order and the first one whose ceiling is at or
//! above the taxable income applies, so an income sitting exactly on a
//! ceiling belongs to the lower bracket.

use crate::config::{TaxBracket, TaxTable};
use crate::models::{AuditStep, TaxStatus};

/// The result of a withholding tax calculation.
#[derive(Debug, Clone)]
pub struct WithholdingTaxResult {
    /// The tax owed.
    pub tax: f64,
    /// Zero-based index of the bracket that applied, if any.
    pub bracket_index: Option<usize>,
    /// Whether any tax was charged.
    pub tax_status: TaxStatus,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Finds the bracket that applies to `taxable_income`.
///
/// Returns `None` only for an empty table. If no ceiling covers the income
/// the last bracket applies.
pub fn find_bracket(taxable_income: f64, table: &TaxTable) -> Option<(usize, &TaxBracket)> {
    table
        .brackets
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.covers(taxable_income))
        .or_else(|| table.brackets.iter().enumerate().last())
}

/// Tax owed on `taxable_income`, never negative.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::withholding_tax;
/// use prominent_payroll::config::StatutoryConfig;
///
/// let table = StatutoryConfig::default().tax_table().clone();
/// assert_eq!(withholding_tax(20833.0, &table), 0.0);
/// assert!((withholding_tax(47200.0, &table) - 4648.4).abs() < 1e-9);
/// ```
pub fn withholding_tax(taxable_income: f64, table: &TaxTable) -> f64 {
    find_bracket(taxable_income, table)
        .map(|(_, bracket)| bracket.tax_on(taxable_income).max(0.0))
        .unwrap_or(0.0)
}

/// Whether `tax` means the employee was taxed.
pub fn tax_status(tax: f64) -> TaxStatus {
    if tax > 0.0 {
        TaxStatus::Bracketed
    } else {
        TaxStatus::Exempt
    }
}

/// Calculates withholding tax and records which bracket applied.
pub fn calculate_withholding_tax(
    taxable_income: f64,
    table: &TaxTable,
    step_number: u32,
) -> WithholdingTaxResult {
    let bracket = find_bracket(taxable_income, table);
    let tax = withholding_tax(taxable_income, table);
    let status = tax_status(tax);

    let (bracket_index, input, reasoning) = match bracket {
        Some((index, bracket)) => (
            Some(index),
            serde_json::json!({
                "taxable_income": taxable_income,
                "bracket": index + 1,
                "up_to": bracket.up_to,
                "base": bracket.base,
                "over": bracket.over,
                "rate": bracket.rate
            }),
            if status == TaxStatus::Exempt {
                format!(
                    "Taxable income {} is within bracket {}; no tax due",
                    taxable_income,
                    index + 1
                )
            } else {
                format!(
                    "Bracket {}: {} + ({} - {}) x {} = {}",
                    index + 1,
                    bracket.base,
                    taxable_income,
                    bracket.over,
                    bracket.rate,
                    tax
                )
            },
        ),
        None => (
            None,
            serde_json::json!({ "taxable_income": taxable_income }),
            "Tax table has no brackets; no tax due".to_string(),
        ),
    };

    WithholdingTaxResult {
        tax,
        bracket_index,
        tax_status: status,
        audit_step: AuditStep {
            step_number,
            row: None,
            rule_id: "withholding_tax".to_string(),
            rule_name: "Withholding Tax".to_string(),
            legal_ref: table.legal_ref.clone(),
            input,
            output: serde_json::json!({
                "withholding_tax": tax,
                "tax_status": status,
                "label": status.label()
            }),
            reasoning,
        },
    }
}
