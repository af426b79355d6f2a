use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenPairData;
use crate::identity::errors::AuthError;
use crate::identity::models::Credentials;
use crate::identity::models::Handle;
use crate::identity::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    // A syntactically invalid handle cannot belong to anyone; same response
    // as a wrong password
    let handle = Handle::new(body.email)
        .map_err(|_| ApiError::from(AuthError::InvalidCredentials))?;

    state
        .auth_service
        .login(Credentials {
            handle,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)
        .map(|pair| ApiSuccess::new(StatusCode::OK, pair.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
