//! Payroll engine for Philippine statutory deductions.
//!
//! This crate turns loosely-typed spreadsheet rows into payslips with SSS,
//! Pag-IBIG and PhilHealth contributions and TRAIN withholding tax, and
//! serves the calculation, template and register downloads, and a digital
//! readiness quiz over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod quiz;
pub mod sheet;
