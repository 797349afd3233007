//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in 2023
//! TRAIN schedule used when no configuration directory is given.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Metadata about the statutory schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "PH-TRAIN-2023").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The date from which the schedule applies.
    pub effective_date: NaiveDate,
    /// Where the figures come from.
    pub source: String,
}

/// Social Security System contribution rule: a capped percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SssRule {
    /// Employee share as a fraction of basic salary.
    pub rate: f64,
    /// Maximum monthly contribution.
    pub cap: f64,
    /// Statute reference.
    pub legal_ref: String,
}

/// Pag-IBIG contribution rule: a flat monthly amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagIbigRule {
    /// Fixed monthly contribution.
    pub amount: f64,
    /// Statute reference.
    pub legal_ref: String,
}

/// PhilHealth contribution rule: an uncapped percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilHealthRule {
    /// Employee share as a fraction of basic salary.
    pub rate: f64,
    /// Statute reference.
    pub legal_ref: String,
}

/// The three mandatory contributions deducted before tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionSchedule {
    /// SSS rule.
    pub sss: SssRule,
    /// Pag-IBIG rule.
    pub pag_ibig: PagIbigRule,
    /// PhilHealth rule.
    pub phil_health: PhilHealthRule,
}

/// One bracket of the withholding tax table.
///
/// Tax inside the bracket is `base + (taxable - over) * rate`. A bracket
/// covers taxable income up to and including `up_to`; the last bracket has
/// no ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive ceiling, `None` for the top bracket.
    #[serde(default)]
    pub up_to: Option<f64>,
    /// Fixed tax owed at the bracket floor.
    pub base: f64,
    /// Income above which the marginal rate applies.
    pub over: f64,
    /// Marginal rate.
    pub rate: f64,
}

impl TaxBracket {
    /// Returns true if `taxable` falls at or below this bracket's ceiling.
    pub fn covers(&self, taxable: f64) -> bool {
        self.up_to.is_none_or(|ceiling| taxable <= ceiling)
    }

    /// Tax owed on `taxable` under this bracket's formula.
    pub fn tax_on(&self, taxable: f64) -> f64 {
        self.base + (taxable - self.over) * self.rate
    }
}

/// Progressive withholding tax table, brackets in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTable {
    /// Statute reference.
    pub legal_ref: String,
    /// Brackets ordered by ceiling.
    pub brackets: Vec<TaxBracket>,
}

/// Contents of `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScheduleFile {
    pub schedule: ScheduleMetadata,
    pub contributions: ContributionSchedule,
}

/// The complete statutory configuration used by the payslip calculator.
///
/// `StatutoryConfig::default()` is the 2023 TRAIN schedule with the
/// demo's exact constants.
///
/// # Example
///
/// ```
/// use prominent_payroll::config::StatutoryConfig;
///
/// let config = StatutoryConfig::default();
/// assert_eq!(config.contributions().sss.cap, 1350.0);
/// assert_eq!(config.tax_table().brackets.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryConfig {
    metadata: ScheduleMetadata,
    contributions: ContributionSchedule,
    tax_table: TaxTable,
}

impl StatutoryConfig {
    /// Creates a configuration from its parts, validating the tax table and
    /// contribution figures.
    pub fn new(
        metadata: ScheduleMetadata,
        contributions: ContributionSchedule,
        tax_table: TaxTable,
    ) -> PayrollResult<Self> {
        let config = Self {
            metadata,
            contributions,
            tax_table,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the contribution schedule.
    pub fn contributions(&self) -> &ContributionSchedule {
        &self.contributions
    }

    /// Returns the withholding tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    fn validate(&self) -> PayrollResult<()> {
        let c = &self.contributions;
        let figures = [
            ("sss.rate", c.sss.rate),
            ("sss.cap", c.sss.cap),
            ("pag_ibig.amount", c.pag_ibig.amount),
            ("phil_health.rate", c.phil_health.rate),
        ];
        for (field, value) in figures {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }

        let brackets = &self.tax_table.brackets;
        if brackets.is_empty() {
            return Err(invalid("tax table has no brackets".to_string()));
        }

        let last = brackets.len() - 1;
        let mut previous_ceiling: Option<f64> = None;
        for (i, bracket) in brackets.iter().enumerate() {
            for (field, value) in [
                ("base", bracket.base),
                ("over", bracket.over),
                ("rate", bracket.rate),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(invalid(format!(
                        "bracket {} {field} must be a non-negative number, got {value}",
                        i + 1
                    )));
                }
            }

            match (bracket.up_to, i == last) {
                (None, true) => {}
                (None, false) => {
                    return Err(invalid(format!(
                        "bracket {} has no ceiling but is not the last bracket",
                        i + 1
                    )));
                }
                (Some(_), true) => {
                    return Err(invalid("last bracket must not have a ceiling".to_string()));
                }
                (Some(ceiling), false) => {
                    if previous_ceiling.is_some_and(|prev| ceiling <= prev) {
                        return Err(invalid(format!(
                            "bracket {} ceiling {ceiling} is not above the previous ceiling",
                            i + 1
                        )));
                    }
                    previous_ceiling = Some(ceiling);
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> PayrollError {
    PayrollError::InvalidConfig { message }
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self {
            metadata: ScheduleMetadata {
                code: "PH-TRAIN-2023".to_string(),
                name: "Philippine statutory deductions, TRAIN 2023 monthly table".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
                source: "Simplified demo rates".to_string(),
            },
            contributions: ContributionSchedule {
                sss: SssRule {
                    rate: 0.045,
                    cap: 1350.0,
                    legal_ref: "RA 11199".to_string(),
                },
                pag_ibig: PagIbigRule {
                    amount: 200.0,
                    legal_ref: "RA 9679".to_string(),
                },
                phil_health: PhilHealthRule {
                    rate: 0.025,
                    legal_ref: "RA 11223".to_string(),
                },
            },
            tax_table: TaxTable {
                legal_ref: "RA 10963".to_string(),
                brackets: vec![
                    TaxBracket {
                        up_to: Some(20833.0),
                        base: 0.0,
                        over: 0.0,
                        rate: 0.0,
                    },
                    TaxBracket {
                        up_to: Some(33333.0),
                        base: 0.0,
                        over: 20833.0,
                        rate: 0.15,
                    },
                    TaxBracket {
                        up_to: Some(66667.0),
                        base: 1875.0,
                        over: 33333.0,
                        rate: 0.20,
                    },
                    TaxBracket {
                        up_to: Some(166667.0),
                        base: 8541.67,
                        over: 66667.0,
                        rate: 0.25,
                    },
                    TaxBracket {
                        up_to: Some(666667.0),
                        base: 33541.67,
                        over: 166667.0,
                        rate: 0.30,
                    },
                    TaxBracket {
                        up_to: None,
                        base: 183541.67,
                        over: 666667.0,
                        rate: 0.35,
                    },
                ],
            },
        }
    }
}
