//! HTTP API for the payroll engine.
//!
//! This module exposes payroll calculation over JSON rows or an uploaded
//! sheet, the register and template downloads, and the readiness quiz.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{REGISTER_FILE_NAME, TEMPLATE_FILE_NAME, create_router};
pub use request::{CalculateRequest, QuizRequest, RegisterRequest, UploadParams};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
