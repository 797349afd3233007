//! Payslip calculation.
//!
//! This module maps a basic salary to its statutory deductions,
//! withholding tax and net pay:
//!
//! 1. SSS, Pag-IBIG and PhilHealth contributions
//! 2. taxable income = salary less contributions, floored at zero
//! 3. progressive withholding tax on the taxable income
//! 4. net pay = salary less contributions less tax
//!
//! A zero salary yields all-zero figures. Every function here is pure.

use std::sync::LazyLock;

use crate::config::StatutoryConfig;
use crate::models::{AuditStep, PayslipFigures};

use super::contributions::{
    calculate_pag_ibig, calculate_phil_health, calculate_sss, pag_ibig_contribution,
    phil_health_contribution, sss_contribution,
};
use super::withholding_tax::{calculate_withholding_tax, tax_status, withholding_tax};

static BUILTIN_CONFIG: LazyLock<StatutoryConfig> = LazyLock::new(StatutoryConfig::default);

/// Figures plus the audit steps that produced them.
#[derive(Debug, Clone)]
pub struct PayslipCalculation {
    /// The computed figures.
    pub figures: PayslipFigures,
    /// One step per rule, in the order they were applied.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes payslip figures under the built-in 2023 TRAIN schedule.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::compute_payslip;
///
/// let figures = compute_payslip(50000.0);
/// assert_eq!(figures.sss, 1350.0);
/// assert_eq!(figures.phil_health, 1250.0);
/// assert_eq!(figures.taxable_income, 47200.0);
/// assert!((figures.withholding_tax - 4648.4).abs() < 1e-9);
/// assert!((figures.net_pay - 42551.6).abs() < 1e-9);
/// ```
pub fn compute_payslip(basic_salary: f64) -> PayslipFigures {
    compute_payslip_with(&BUILTIN_CONFIG, basic_salary)
}

/// Computes payslip figures under the given schedule.
///
/// Non-finite input is treated as zero.
pub fn compute_payslip_with(config: &StatutoryConfig, basic_salary: f64) -> PayslipFigures {
    let basic_salary = sanitize(basic_salary);
    if basic_salary == 0.0 {
        return PayslipFigures::ZERO;
    }

    let rules = config.contributions();
    let sss = sss_contribution(basic_salary, &rules.sss);
    let pag_ibig = pag_ibig_contribution(&rules.pag_ibig);
    let phil_health = phil_health_contribution(basic_salary, &rules.phil_health);

    let pre_tax = sss + pag_ibig + phil_health;
    let taxable_income = (basic_salary - pre_tax).max(0.0);
    let tax = withholding_tax(taxable_income, config.tax_table());

    PayslipFigures {
        basic_salary,
        sss,
        pag_ibig,
        phil_health,
        taxable_income,
        withholding_tax: tax,
        net_pay: basic_salary - pre_tax - tax,
        tax_status: tax_status(tax),
    }
}

/// Computes payslip figures and records every step.
///
/// Steps are numbered from `first_step`. The figures are identical to
/// [`compute_payslip_with`].
pub fn calculate_payslip(
    config: &StatutoryConfig,
    basic_salary: f64,
    first_step: u32,
) -> PayslipCalculation {
    let basic_salary = sanitize(basic_salary);
    if basic_salary == 0.0 {
        return PayslipCalculation {
            figures: PayslipFigures::ZERO,
            audit_steps: vec![zero_salary_step(first_step)],
        };
    }

    let rules = config.contributions();
    let mut step_number = first_step;
    let mut audit_steps = Vec::with_capacity(6);

    let sss = calculate_sss(basic_salary, &rules.sss, step_number);
    audit_steps.push(sss.audit_step);
    step_number += 1;

    let pag_ibig = calculate_pag_ibig(&rules.pag_ibig, step_number);
    audit_steps.push(pag_ibig.audit_step);
    step_number += 1;

    let phil_health = calculate_phil_health(basic_salary, &rules.phil_health, step_number);
    audit_steps.push(phil_health.audit_step);
    step_number += 1;

    let pre_tax = sss.amount + pag_ibig.amount + phil_health.amount;
    let taxable_income = (basic_salary - pre_tax).max(0.0);
    audit_steps.push(AuditStep {
        step_number,
        row: None,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        legal_ref: config.tax_table().legal_ref.clone(),
        input: serde_json::json!({
            "basic_salary": basic_salary,
            "pre_tax_deductions": pre_tax
        }),
        output: serde_json::json!({ "taxable_income": taxable_income }),
        reasoning: format!(
            "max(0, {} - {}) = {}",
            basic_salary, pre_tax, taxable_income
        ),
    });
    step_number += 1;

    let tax = calculate_withholding_tax(taxable_income, config.tax_table(), step_number);
    audit_steps.push(tax.audit_step);
    step_number += 1;

    let net_pay = basic_salary - pre_tax - tax.tax;
    audit_steps.push(AuditStep {
        step_number,
        row: None,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_ref: String::new(),
        input: serde_json::json!({
            "basic_salary": basic_salary,
            "pre_tax_deductions": pre_tax,
            "withholding_tax": tax.tax
        }),
        output: serde_json::json!({ "net_pay": net_pay }),
        reasoning: format!(
            "{} - {} - {} = {}",
            basic_salary, pre_tax, tax.tax, net_pay
        ),
    });

    PayslipCalculation {
        figures: PayslipFigures {
            basic_salary,
            sss: sss.amount,
            pag_ibig: pag_ibig.amount,
            phil_health: phil_health.amount,
            taxable_income,
            withholding_tax: tax.tax,
            net_pay,
            tax_status: tax.tax_status,
        },
        audit_steps,
    }
}

fn sanitize(basic_salary: f64) -> f64 {
    if basic_salary.is_finite() && basic_salary != 0.0 {
        basic_salary
    } else {
        0.0
    }
}

fn zero_salary_step(step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        row: None,
        rule_id: "zero_salary".to_string(),
        rule_name: "Zero Salary".to_string(),
        legal_ref: String::new(),
        input: serde_json::json!({ "basic_salary": 0.0 }),
        output: serde_json::json!({ "net_pay": 0.0 }),
        reasoning: "No salary; no contributions or tax apply".to_string(),
    }
}
