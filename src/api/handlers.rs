//! HTTP request handlers for the payroll API.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_payroll;
use crate::error::PayrollError;
use crate::models::PayrollRun;
use crate::quiz::{AnswerOption, OPTIONS, QUESTIONS, Question, score_answers};
use crate::sheet::{
    SAMPLE_NAMES, read_sheet_bytes, sample_roster, write_register_csv, write_roster_csv,
};

use super::request::{CalculateRequest, QuizRequest, RegisterRequest, UploadParams};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// File name offered for the sample roster download.
pub const TEMPLATE_FILE_NAME: &str = "Prominent_Payroll_50_Employees.csv";

/// File name offered for the payroll register download.
pub const REGISTER_FILE_NAME: &str = "Payroll_Register.csv";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/upload", post(upload_handler))
        .route("/payroll/register", post(register_handler))
        .route("/payroll/template", get(template_handler))
        .route("/quiz", get(quiz_handler))
        .route("/quiz/score", post(quiz_score_handler))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    schedule: String,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        schedule: state.config().metadata().code.clone(),
    })
}

/// Handler for `POST /payroll/calculate`.
///
/// Runs payroll over the posted rows and returns the full run. Bad rows
/// never fail the request; they show up as audit warnings instead.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<PayrollRun>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let Json(request) = payload.map_err(|rejection| rejection_error(correlation_id, rejection))?;

    let run = run_payroll(&request.rows, state.config().config(), request.options());
    info!(
        correlation_id = %correlation_id,
        run_id = %run.run_id,
        rows = request.rows.len(),
        explain = request.explain,
        "Payroll calculation completed"
    );
    Ok(Json(run))
}

/// Handler for `POST /payroll/upload`.
///
/// The body is the uploaded sheet itself, CSV or a workbook, and rows come
/// from its first worksheet. `?explain=true` records calculation steps.
async fn upload_handler(
    State(state): State<AppState>,
    params: Result<Query<UploadParams>, QueryRejection>,
    body: Bytes,
) -> Result<Json<PayrollRun>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing payroll upload request"
    );

    let Query(params) = params.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Query error");
        ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", rejection.body_text()))
    })?;
    let rows = read_sheet_bytes(&body).map_err(|err| logged(correlation_id, err))?;

    let run = run_payroll(&rows, state.config().config(), params.options());
    info!(
        correlation_id = %correlation_id,
        run_id = %run.run_id,
        rows = rows.len(),
        explain = params.explain,
        "Uploaded sheet calculated"
    );
    Ok(Json(run))
}

/// Handler for `POST /payroll/register`.
///
/// Same computation as `/payroll/calculate`, returned as a CSV register.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll register request");

    let Json(request) = payload.map_err(|rejection| rejection_error(correlation_id, rejection))?;

    let run = run_payroll(&request.rows, state.config().config(), Default::default());
    let mut body = Vec::new();
    write_register_csv(&run.payslips, &mut body)
        .map_err(|err| logged(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        run_id = %run.run_id,
        rows = run.payslips.len(),
        "Payroll register exported"
    );
    Ok(csv_attachment(REGISTER_FILE_NAME, body))
}

/// Handler for `GET /payroll/template`.
///
/// Returns a freshly randomized sample roster to use as an upload template.
/// The roster is served as CSV rather than an xlsx workbook with an
/// "Employees" sheet: the workbook crate here only reads. The columns are
/// the same and `/payroll/upload` accepts the CSV as-is.
async fn template_handler() -> Result<Response, ApiErrorResponse> {
    let roster = sample_roster(&mut rand::thread_rng(), SAMPLE_NAMES.len());
    let mut body = Vec::new();
    write_roster_csv(&roster, &mut body)?;
    Ok(csv_attachment(TEMPLATE_FILE_NAME, body))
}

#[derive(Serialize)]
struct QuizResponse {
    questions: &'static [Question],
    options: &'static [AnswerOption],
}

async fn quiz_handler() -> Json<QuizResponse> {
    Json(QuizResponse {
        questions: &QUESTIONS,
        options: &OPTIONS,
    })
}

/// Handler for `POST /quiz/score`.
async fn quiz_score_handler(
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| rejection_error(correlation_id, rejection))?;
    let report = score_answers(&request.answers).map_err(|err| logged(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        answered = report.answered,
        percent = report.percent,
        "Readiness quiz scored"
    );
    Ok((StatusCode::OK, Json(report)).into_response())
}

fn csv_attachment(file_name: &str, body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

fn logged(correlation_id: Uuid, error: PayrollError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Maps a JSON extractor rejection to a 400 response.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
