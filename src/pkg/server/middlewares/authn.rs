use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use standard_error::{StandardError, Status};

use crate::{pkg::server::state::AppState, prelude::Result};

/// Lets a request through only when it carries the configured admin bearer
/// token. Without a configured token every request is denied.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response> {
    let bearer = headers.typed_get::<Authorization<Bearer>>();
    if let (Some(bearer), Some(expected)) = (bearer, state.settings.admin_token.as_deref()) {
        if bearer.token() == expected {
            return Ok(next.run(request).await);
        }
    }
    tracing::warn!("admin token missing or invalid, authentication denied");
    Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))
}
