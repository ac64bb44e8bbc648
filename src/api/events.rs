use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{EventLogError, Result};
use crate::server::state::AppState;

/// Build the `/v1/events` routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_handler))
        .route("/get/:event_id", get(get_handler))
        .route("/insert", post(insert_handler))
}

/// Raw query parameters; `size` is parsed by hand to report bound errors.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub size: Option<String>,
}

/// GET /v1/events/all - Return the first `size` archived events.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let size = parse_size(
        params.size.as_deref(),
        state.config.default_page_size,
        state.config.max_page_size,
    )?;
    let events = state.service.return_logs(size).await?;
    Ok(Json(events))
}

/// GET /v1/events/get/:event_id - Return a single archived event.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse> {
    let event = state.service.return_log(&event_id).await?;
    Ok(Json(event))
}

/// POST /v1/events/insert - Validate and archive a batch of events.
///
/// Answers 201 even when individual records were rejected; their reasons
/// are part of the body.
pub async fn insert_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Vec<Value>>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(records) = payload.map_err(|e| EventLogError::InvalidRequest(e.body_text()))?;
    let results = state.service.insert_logs(records).await?;
    Ok((StatusCode::CREATED, Json(results)))
}

fn parse_size(raw: Option<&str>, default: usize, max: usize) -> Result<usize> {
    let raw = match raw {
        None => return Ok(default),
        Some(raw) => raw,
    };

    let size: i64 = raw.trim().parse().map_err(|_| {
        EventLogError::InvalidRequest(
            "Input should be a valid integer, unable to parse string as an integer \
             found in ('query', 'size')"
                .to_string(),
        )
    })?;

    if size < 1 {
        return Err(EventLogError::InvalidRequest(
            "Input should be greater than or equal to 1 found in ('query', 'size')".to_string(),
        ));
    }
    if size as u64 > max as u64 {
        return Err(EventLogError::InvalidRequest(format!(
            "Input should be less than or equal to {} found in ('query', 'size')",
            max
        )));
    }

    Ok(size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_default() {
        assert_eq!(parse_size(None, 10, 1000).unwrap(), 10);
    }

    #[test]
    fn test_parse_size_bounds() {
        assert_eq!(parse_size(Some("1"), 10, 1000).unwrap(), 1);
        assert_eq!(parse_size(Some("1000"), 10, 1000).unwrap(), 1000);

        let err = parse_size(Some("1001"), 10, 1000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid request: Input should be less than or equal to 1000 found in ('query', 'size')"
        );
        assert!(parse_size(Some("0"), 10, 1000).is_err());
        assert!(parse_size(Some("-5"), 10, 1000).is_err());
    }

    #[test]
    fn test_parse_size_not_a_number() {
        let err = parse_size(Some("ten"), 10, 1000).unwrap_err();
        assert!(matches!(err, EventLogError::InvalidRequest(_)));
    }
}
