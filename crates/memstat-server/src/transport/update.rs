//! Update endpoint: `POST /update/<type>/<name>/<value>`.
//!
//! Order of checks (first failure wins, nothing is written on failure):
//! method -> path shape -> name presence -> type -> value.
//! The response status is the only contract; the body is a short hint.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use memstat_core::error::{ClientCode, MemstatError, Result};
use memstat_core::protocol::{parse_update_path, MetricUpdate};

use crate::app_state::AppState;

pub async fn update(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    match apply_update(&state, &method, uri.path()) {
        Ok(update) => {
            tracing::debug!(kind = %update.kind(), name = %update.name(), "metric updated");
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            tracing::debug!(%method, path = %uri.path(), error = %e, "update rejected");
            error_response(&e)
        }
    }
}

/// Validate, decode and apply one update. The store is touched only on success.
pub fn apply_update(state: &AppState, method: &Method, path: &str) -> Result<MetricUpdate> {
    if *method != Method::POST {
        return Err(MemstatError::MethodNotAllowed(method.to_string()));
    }
    let update = parse_update_path(path)?;
    state.storage().apply(&update);
    Ok(update)
}

/// Map a client-facing code onto an HTTP status.
pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(e: &MemstatError) -> Response {
    let status = status_for(e.client_code());
    let body = e.to_string();
    if status == StatusCode::METHOD_NOT_ALLOWED {
        return (status, [(header::ALLOW, "POST")], body).into_response();
    }
    (status, body).into_response()
}
