//! HTTP request handlers.

use super::types::{HealthResponse, ListResponse, SubmitRequest, SubmitResponse};
use super::AppState;
use crate::error::ServerError;
use crate::report;
use crate::validate::validate;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::{info, warn};

/// Name of the header carrying the operator credential.
pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const EXPORT_FILENAME: &str = "syntul_masters_2026.xlsx";

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ServerError> {
    let supplied = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if state.auth.authorize(supplied) {
        Ok(())
    } else {
        warn!("Rejected admin request with invalid token");
        Err(ServerError::Unauthorized)
    }
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        registrations: state.store.count().await,
    })
}

/// Accept a new registration.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), ServerError> {
    let Json(request) = payload.map_err(|_| ServerError::MalformedRequest)?;

    let draft = validate(&request)?;
    let entry = state.store.append(draft).await?;

    info!(id = %entry.id, team = %entry.team, "Registration accepted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            id: entry.id,
            message: "Registration accepted.".to_string(),
        }),
    ))
}

/// List all registrations (admin).
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListResponse>, ServerError> {
    authorize(&state, &headers)?;

    let registrations = state.store.load().await;

    Ok(Json(ListResponse {
        count: registrations.len(),
        registrations,
    }))
}

/// Export all registrations as a spreadsheet (admin).
pub async fn export(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    authorize(&state, &headers)?;

    let registrations = state.store.load().await;
    let workbook = report::generate(&registrations)?;

    info!(count = registrations.len(), "Exported registration report");

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        workbook,
    ))
}
