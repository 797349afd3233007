//! Digital readiness quiz.
//!
//! Eight yes-or-no-ish questions about how a business runs its files,
//! approvals, payroll and reporting, each answered on a 1 to 5 scale. The
//! scorer turns a set of answers into a [`ReadinessReport`].

mod questions;
mod scoring;

pub use questions::{AnswerOption, OPTIONS, QUESTIONS, Question, question};
pub use scoring::{ReadinessLabel, ReadinessReport, readiness_label, score_answers};
