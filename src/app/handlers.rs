//! HTTP handlers for the whisky resource.
//!
//! Each handler logs the call, makes a single store call (create makes two)
//! and maps the outcome onto a status code.

use crate::app::AppState;
use crate::domain::{Whisky, WhiskyId};
use crate::utils::error::{Result, ServiceError};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use tracing::info;

pub const HELLO_MESSAGE: &str = "Hello Confoo!!!";

pub async fn hello() -> Json<&'static str> {
    info!("Calling hello()...");
    Json(HELLO_MESSAGE)
}

pub async fn list_whiskies(State(state): State<AppState>) -> Result<Json<Vec<Whisky>>> {
    info!("Calling list_whiskies()...");
    let whiskies = state.store.find_all().await?;
    Ok(Json(whiskies))
}

pub async fn get_whisky(
    State(state): State<AppState>,
    Path(whisky_id): Path<String>,
) -> Result<Json<Whisky>> {
    info!(whisky_id = %whisky_id, "Calling get_whisky()...");
    let id = WhiskyId::parse(&whisky_id)?;

    state
        .store
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ServiceError::NotFoundError)
}

/// Inserts a new whisky after checking no record shares its `bottle`.
///
/// The lookup and the insert are separate store calls, so two concurrent
/// creates with the same bottle can both succeed.
pub async fn create_whisky(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Whisky>)> {
    let whisky = parse_json_body(&headers, &body)?;
    info!(bottle = %whisky.bottle, "Creating new whisky");

    if state.store.find_by_bottle(&whisky.bottle).await?.is_some() {
        return Err(ServiceError::DuplicateBottleError {
            bottle: whisky.bottle,
        });
    }

    let id = state.store.insert(&whisky.without_id()).await?;
    let created = whisky.with_id(id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Decodes a JSON body. A missing `Content-Type` is read as JSON; any other
/// non-JSON content type is rejected.
fn parse_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Whisky> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .map(|value| value.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(ServiceError::InvalidBodyError {
                message: "Expected request with `Content-Type: application/json`".to_string(),
            });
        }
    }

    serde_json::from_slice(body).map_err(|e| ServiceError::InvalidBodyError {
        message: format!("Failed to parse the request body as a whisky: {}", e),
    })
}

pub async fn delete_whisky(
    State(state): State<AppState>,
    Path(whisky_id): Path<String>,
) -> Result<StatusCode> {
    info!(whisky_id = %whisky_id, "Calling delete_whisky()...");
    let id = WhiskyId::parse(&whisky_id)?;

    match state.store.delete_by_id(&id).await? {
        0 => Err(ServiceError::NotFoundError),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
