//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_work_hours, calculate_pay_breakdown, parse_schedule_csv};
use crate::models::{Adjustment, Employee, PayPeriod, PayslipResult};

use super::request::{AggregateRequest, PayslipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips/calculate", post(payslip_handler))
        .route("/work-hours/schedule", post(schedule_handler))
        .route("/work-hours/aggregate", post(aggregate_handler))
        .with_state(state)
}

/// Handler for POST /payslips/calculate.
///
/// Accepts a payslip request and returns the calculated pay breakdown.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_rejection_response(correlation_id, rejection);
        }
    };

    let employee: Employee = request.employee.clone().into();
    let pay_period: PayPeriod = request.pay_period.clone().into();
    let hours = request.hours();
    let allowances: Vec<Adjustment> = request.allowances.into_iter().map(Into::into).collect();
    let deductions: Vec<Adjustment> = request.deductions.into_iter().map(Into::into).collect();

    if let Err(err) = pay_period.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid pay period"
        );
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    let rates = state.config().pay_rates();
    match calculate_pay_breakdown(
        &employee.compensation_basis,
        &hours,
        &allowances,
        &deductions,
        rates,
    ) {
        Ok(components) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                gross_amount = %components.gross_amount,
                net_amount = %components.net_amount,
                "Payslip calculated successfully"
            );
            let result = PayslipResult {
                payslip_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: employee.id,
                pay_period,
                components,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /work-hours/schedule.
///
/// Accepts raw work schedule CSV text and returns the parsed entries with
/// their derived hour breakdowns.
async fn schedule_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work schedule");

    let text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Work schedule body is not valid UTF-8"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::new(
                    "INVALID_ENCODING",
                    "Work schedule body must be UTF-8 text",
                )),
            )
                .into_response();
        }
    };

    let schedule = state.config().break_schedule();
    match parse_schedule_csv(text, schedule) {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                entries = entries.len(),
                "Work schedule parsed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(entries),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Work schedule rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /work-hours/aggregate.
///
/// Accepts a list of work records and returns their day/week/month/year
/// roll-up.
async fn aggregate_handler(
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_rejection_response(correlation_id, rejection);
        }
    };

    let aggregated = aggregate_work_hours(&request.records);
    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        day_buckets = aggregated.by_day.len(),
        "Aggregation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(aggregated),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a 400 response.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Builds an error response with a JSON content type.
fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
