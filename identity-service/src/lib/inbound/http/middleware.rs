use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::identity::models::Identity;
use crate::identity::ports::AuthServicePort;
use crate::inbound::http::handlers::GENERIC_AUTH_FAILURE;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity for one request.
///
/// Dropped when the request ends; the next request re-validates and
/// re-resolves from scratch.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

/// Session guard middleware.
///
/// Extracts the bearer token, validates it as an access token, and resolves
/// the subject against the user directory before any resource handler runs.
/// All validation failures surface as the same generic 401; the specific
/// reason is only logged.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let identity = state.auth_service.authenticate(token).await.map_err(|e| {
        tracing::warn!(reason = %e, "Session rejected");
        unauthorized(GENERIC_AUTH_FAILURE)
    })?;

    req.extensions_mut().insert(CurrentIdentity(identity));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
