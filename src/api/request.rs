//! Request types for the payroll API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculation::RunOptions;
use crate::models::RawRow;

/// Request body for `POST /payroll/calculate`.
///
/// `rows` are the records of an uploaded sheet, one JSON object per row
/// keyed by column header.
///
/// # Example
///
/// ```
/// use prominent_payroll::api::CalculateRequest;
///
/// let request: CalculateRequest = serde_json::from_str(
///     r#"{"rows": [{"Name": "Juan Luna", "Salary": "25,000"}]}"#,
/// ).unwrap();
/// assert_eq!(request.rows.len(), 1);
/// assert!(!request.explain);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The sheet rows, in sheet order.
    pub rows: Vec<RawRow>,
    /// Record every calculation step in the audit trace.
    #[serde(default)]
    pub explain: bool,
}

impl CalculateRequest {
    /// Run options requested by the caller.
    pub fn options(&self) -> RunOptions {
        RunOptions {
            explain: self.explain,
        }
    }
}

/// Query string for `POST /payroll/upload`, whose body is the sheet itself.
///
/// # Example
///
/// ```
/// use prominent_payroll::api::UploadParams;
///
/// let params: UploadParams = serde_json::from_str("{}").unwrap();
/// assert!(!params.explain);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UploadParams {
    /// Record every calculation step in the audit trace.
    #[serde(default)]
    pub explain: bool,
}

impl UploadParams {
    /// Run options requested by the caller.
    pub fn options(&self) -> RunOptions {
        RunOptions {
            explain: self.explain,
        }
    }
}

/// Request body for `POST /payroll/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// The sheet rows, in sheet order.
    pub rows: Vec<RawRow>,
}

/// Request body for `POST /quiz/score`: question id to score (1-5).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Answers keyed by question id.
    pub answers: BTreeMap<u32, u8>,
}
