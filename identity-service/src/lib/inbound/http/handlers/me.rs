use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::models::Identity;
use crate::inbound::http::middleware::CurrentIdentity;

/// Who-am-I probe for the session guard: returns the identity the request's
/// bearer token resolved to.
pub async fn me(
    Extension(current): Extension<CurrentIdentity>,
) -> Result<ApiSuccess<IdentityData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&current.0).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentityData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.handle.as_str().to_string(),
            name: identity.display_name.clone(),
            created_at: identity.created_at,
        }
    }
}
