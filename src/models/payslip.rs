//! Payslip models.
//!
//! This module contains [`PayslipFigures`], the pure numeric output of the
//! payslip calculator, and [`Payslip`], which pairs those figures with the
//! employee they belong to.

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// Whether withholding tax applies to a payslip.
///
/// # Example
///
/// ```
/// use prominent_payroll::models::TaxStatus;
///
/// assert_eq!(TaxStatus::Exempt.label(), "Tax Exempt (<₱250k/yr)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStatus {
    /// Taxable income falls inside the zero-rate bracket.
    Exempt,
    /// Taxable income falls inside a taxed bracket.
    Bracketed,
}

impl TaxStatus {
    /// Returns the short explanation shown next to the tax figure.
    pub fn label(&self) -> &'static str {
        match self {
            TaxStatus::Exempt => "Tax Exempt (<₱250k/yr)",
            TaxStatus::Bracketed => "Calculated via TRAIN brackets",
        }
    }
}

/// Deductions, tax and net pay computed from one basic salary.
///
/// # Example
///
/// ```
/// use prominent_payroll::calculation::compute_payslip;
///
/// let figures = compute_payslip(20000.0);
/// assert_eq!(figures.pre_tax_deductions(), 1600.0);
/// assert_eq!(figures.net_pay, 18400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayslipFigures {
    /// Gross monthly salary the figures were computed from.
    pub basic_salary: f64,
    /// Social Security System contribution (capped percentage).
    pub sss: f64,
    /// Pag-IBIG housing fund contribution (flat).
    pub pag_ibig: f64,
    /// PhilHealth contribution (uncapped percentage).
    pub phil_health: f64,
    /// Basic salary less contributions, floored at zero.
    pub taxable_income: f64,
    /// Progressive withholding tax on the taxable income.
    pub withholding_tax: f64,
    /// Basic salary less contributions and tax.
    pub net_pay: f64,
    /// Whether tax was charged.
    pub tax_status: TaxStatus,
}

impl PayslipFigures {
    /// All-zero figures for a zero salary.
    pub const ZERO: PayslipFigures = PayslipFigures {
        basic_salary: 0.0,
        sss: 0.0,
        pag_ibig: 0.0,
        phil_health: 0.0,
        taxable_income: 0.0,
        withholding_tax: 0.0,
        net_pay: 0.0,
        tax_status: TaxStatus::Exempt,
    };

    /// Sum of the three statutory contributions.
    pub fn pre_tax_deductions(&self) -> f64 {
        self.sss + self.pag_ibig + self.phil_health
    }

    /// Contributions plus withholding tax.
    pub fn total_deductions(&self) -> f64 {
        self.pre_tax_deductions() + self.withholding_tax
    }
}

/// A computed payslip for one employee.
///
/// Serializes flat: identity fields followed by the figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Employee identifier.
    pub id: String,
    /// Employee display name.
    pub name: String,
    /// The computed figures.
    #[serde(flatten)]
    pub figures: PayslipFigures,
}

impl Payslip {
    /// Combines an employee's identity with their computed figures.
    pub fn new(employee: EmployeeRecord, figures: PayslipFigures) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            figures,
        }
    }
}
