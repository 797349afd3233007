//! Mandatory contribution calculations.
//!
//! This module provides the three pre-tax statutory contributions: SSS
//! (a capped percentage of salary), Pag-IBIG (a flat amount) and
//! PhilHealth (an uncapped percentage). Each comes as a plain arithmetic
//! function and as a `calculate_*` variant that also records an audit step.

use crate::config::{PagIbigRule, PhilHealthRule, SssRule};
use crate::models::AuditStep;

/// The result of a contribution calculation, including its audit step.
#[derive(Debug, Clone)]
pub struct ContributionResult {
    /// The contribution amount.
    pub amount: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// SSS contribution: `min(basic × rate, cap)`, never negative.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::sss_contribution;
/// use prominent_payroll::config::StatutoryConfig;
///
/// let config = StatutoryConfig::default();
/// let rule = &config.contributions().sss;
/// assert_eq!(sss_contribution(20000.0, rule), 900.0);
/// assert_eq!(sss_contribution(50000.0, rule), 1350.0);
/// ```
pub fn sss_contribution(basic_salary: f64, rule: &SssRule) -> f64 {
    (basic_salary * rule.rate).min(rule.cap).max(0.0)
}

/// Pag-IBIG contribution: a flat amount independent of salary.
pub fn pag_ibig_contribution(rule: &PagIbigRule) -> f64 {
    rule.amount.max(0.0)
}

/// PhilHealth contribution: `basic × rate`, never negative.
pub fn phil_health_contribution(basic_salary: f64, rule: &PhilHealthRule) -> f64 {
    (basic_salary * rule.rate).max(0.0)
}

/// Calculates the SSS contribution and records how the cap applied.
pub fn calculate_sss(basic_salary: f64, rule: &SssRule, step_number: u32) -> ContributionResult {
    let uncapped = basic_salary * rule.rate;
    let amount = sss_contribution(basic_salary, rule);
    let capped = uncapped > rule.cap;

    let reasoning = if capped {
        format!(
            "{} x {} = {} exceeds the cap; contribution is {}",
            basic_salary, rule.rate, uncapped, rule.cap
        )
    } else {
        format!("{} x {} = {}", basic_salary, rule.rate, amount)
    };

    ContributionResult {
        amount,
        audit_step: AuditStep {
            step_number,
            row: None,
            rule_id: "sss_contribution".to_string(),
            rule_name: "SSS Contribution".to_string(),
            legal_ref: rule.legal_ref.clone(),
            input: serde_json::json!({
                "basic_salary": basic_salary,
                "rate": rule.rate,
                "cap": rule.cap
            }),
            output: serde_json::json!({
                "sss": amount,
                "capped": capped
            }),
            reasoning,
        },
    }
}

/// Calculates the flat Pag-IBIG contribution.
pub fn calculate_pag_ibig(rule: &PagIbigRule, step_number: u32) -> ContributionResult {
    let amount = pag_ibig_contribution(rule);

    ContributionResult {
        amount,
        audit_step: AuditStep {
            step_number,
            row: None,
            rule_id: "pag_ibig_contribution".to_string(),
            rule_name: "Pag-IBIG Contribution".to_string(),
            legal_ref: rule.legal_ref.clone(),
            input: serde_json::json!({ "amount": rule.amount }),
            output: serde_json::json!({ "pag_ibig": amount }),
            reasoning: format!("Flat monthly contribution of {amount}"),
        },
    }
}

/// Calculates the PhilHealth contribution.
pub fn calculate_phil_health(
    basic_salary: f64,
    rule: &PhilHealthRule,
    step_number: u32,
) -> ContributionResult {
    let amount = phil_health_contribution(basic_salary, rule);

    ContributionResult {
        amount,
        audit_step: AuditStep {
            step_number,
            row: None,
            rule_id: "phil_health_contribution".to_string(),
            rule_name: "PhilHealth Contribution".to_string(),
            legal_ref: rule.legal_ref.clone(),
            input: serde_json::json!({
                "basic_salary": basic_salary,
                "rate": rule.rate
            }),
            output: serde_json::json!({ "phil_health": amount }),
            reasoning: format!("{} x {} = {}", basic_salary, rule.rate, amount),
        },
    }
}
