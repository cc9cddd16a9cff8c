//! Session routes: login, logout, current identity.

use axum::{
    Json,
    extract::{Extension, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use staffhub_auth::AuthError;

use crate::app::AppServices;
use crate::context::{AuthContext, TenantContext};
use crate::cookie::{clear_cookie, session_cookie};
use crate::errors::ApiError;
use crate::verify::{PasswordCredentials, PasswordVerifier, VerifyCredentials};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login
///
/// Verifies credentials, mints a token, and sets the credential cookie.
/// The token is also returned in the body for the bearer-header transport.
pub async fn login(
    State(services): State<AppServices>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let verifier = PasswordVerifier::new(services.directory.clone());
    let user = verifier.verify(&PasswordCredentials {
        email: body.email,
        password: body.password,
    })?;

    // Issuing to a disabled account would only mint tokens every
    // subsequent request rejects; fail here instead.
    if !user.active {
        return Err(AuthError::InactiveAccount.into());
    }

    let token = services.codec.issue(user.id)?;
    tracing::info!(user_id = %user.id, "login succeeded");

    let mut response = Json(json!({
        "token": token,
        "user": user.sanitized(),
    }))
    .into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, session_cookie(&services.config, &token));
    Ok(response)
}

/// POST /auth/logout
///
/// Clears the credential cookie. Tokens themselves expire by lifetime;
/// there is no blocklist.
pub async fn logout(State(services): State<AppServices>) -> Response {
    let mut response = (StatusCode::OK, Json(json!({"status": "ok"}))).into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, clear_cookie(&services.config));
    response
}

/// GET /auth/me
pub async fn me(
    Extension(auth): Extension<AuthContext>,
    tenant: Option<Extension<TenantContext>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "user": auth.user(),
        "tenant": tenant.map(|Extension(t)| t.tenant().clone()),
    }))
}
