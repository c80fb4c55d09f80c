use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{error, instrument};

use super::dto::{ErrorBody, LogFoodRequest, LogFoodResponse};
use super::services;
use crate::state::AppState;

/// POST / { user_id, image_base64, food_log_id? }
///
/// The method check happens before any body handling; everything after it
/// runs behind a single error boundary that maps any failure to a 500 with
/// a JSON error message.
#[instrument(skip(state, body))]
pub async fn log_food_entry(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    match run(&state, &body).await {
        Ok(resp) => {
            let mut res = Json(resp).into_response();
            res.headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
            res
        }
        Err(e) => {
            error!(error = ?e, "log food failed");
            let mut message = e.to_string();
            if message.is_empty() {
                message = "Internal Server Error".into();
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response()
        }
    }
}

async fn run(state: &AppState, body: &[u8]) -> anyhow::Result<LogFoodResponse> {
    let req: LogFoodRequest = serde_json::from_slice(body).context("parse request body")?;
    services::log_food(state, req).await
}

/// GET /health — trivial query against the store so the probe reflects
/// database reachability, not just process liveness.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<&'static str, (StatusCode, String)> {
    state
        .store
        .ping()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok("ok")
}
