//! Calculation logic for the payroll engine.
//!
//! This module contains the row normalizer (salary coercion and identity
//! fallbacks), the statutory contribution and withholding tax rules, the
//! payslip calculator that combines them, and the batch driver that runs
//! the calculator over a whole sheet.

mod batch;
mod coercion;
mod contributions;
mod normalizer;
mod payslip;
mod withholding_tax;

pub use batch::{RunOptions, compute_batch, run_payroll};
pub use coercion::{coerce_salary, parse_leading_number, salary_or_zero};
pub use contributions::{
    ContributionResult, calculate_pag_ibig, calculate_phil_health, calculate_sss,
    pag_ibig_contribution, phil_health_contribution, sss_contribution,
};
pub use normalizer::{
    FALLBACK_ID_PREFIX, ID_KEYS, NAME_KEYS, NormalizedRow, SALARY_KEYS, fallback_id,
    fallback_name, first_filled, normalize_row,
};
pub use payslip::{PayslipCalculation, calculate_payslip, compute_payslip, compute_payslip_with};
pub use withholding_tax::{
    WithholdingTaxResult, calculate_withholding_tax, find_bracket, tax_status, withholding_tax,
};
