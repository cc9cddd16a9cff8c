//! Error → HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use staffhub_auth::AuthError;

/// Newtype so `AuthError` can travel through `?` into an axum `Response`.
#[derive(Debug)]
pub struct ApiError(pub AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        auth_error_response(&self.0)
    }
}

/// 401 for identity failures, 403 for policy failures. The `Forbidden`
/// payload names the required role set; that discloses policy, not data.
pub fn auth_error_response(err: &AuthError) -> Response {
    let status = match err {
        AuthError::InvalidCredentials
        | AuthError::Unauthenticated
        | AuthError::TokenInvalid
        | AuthError::InactiveAccount
        | AuthError::TenantNotFound
        | AuthError::InactiveTenant => StatusCode::UNAUTHORIZED,
        AuthError::Forbidden { .. } | AuthError::CrossTenantAccess => StatusCode::FORBIDDEN,
    };

    let mut body = json!({
        "error": err.code(),
        "message": err.to_string(),
    });
    if let AuthError::Forbidden { required } = err {
        body["required_roles"] = json!(
            required
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
        );
    }

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_auth::Role;

    #[test]
    fn identity_failures_are_401() {
        for err in [
            AuthError::InvalidCredentials,
            AuthError::Unauthenticated,
            AuthError::TokenInvalid,
            AuthError::InactiveAccount,
            AuthError::TenantNotFound,
            AuthError::InactiveTenant,
        ] {
            assert_eq!(
                auth_error_response(&err).status(),
                StatusCode::UNAUTHORIZED,
                "{err:?}"
            );
        }
    }

    #[test]
    fn policy_failures_are_403() {
        for err in [
            AuthError::CrossTenantAccess,
            AuthError::Forbidden {
                required: vec![Role::Admin],
            },
        ] {
            assert_eq!(auth_error_response(&err).status(), StatusCode::FORBIDDEN);
        }
    }
}
