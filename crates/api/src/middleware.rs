//! Auth middleware: resolver → identity load → tenant scope.
//!
//! Runs before every protected handler. Role gates are layered per route
//! group on top of this (see `authz`).

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use staffhub_auth::AuthError;
use staffhub_infra::Directory;

use crate::config::AppConfig;
use crate::context::{AuthContext, TenantContext};
use crate::errors::ApiError;
use crate::extract::resolve_token;
use crate::verify::{TokenCredentials, TokenVerifier, VerifyCredentials};

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<TokenVerifier<Arc<dyn Directory>>>,
    pub directory: Arc<dyn Directory>,
    pub config: Arc<AppConfig>,
}

/// Authenticate and scope a request, attaching request context on success.
///
/// Account and tenant state are re-checked here on every request; a token's
/// prior acceptance is never cached. Superadmin requests skip tenant
/// scoping entirely and carry no `TenantContext`.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = resolve_token(
        req.headers(),
        &state.config.cookie_name,
        state.config.transport_order,
    )
    .ok_or(AuthError::Unauthenticated)?;

    let user = state.verifier.verify(&TokenCredentials(token))?;

    if !user.is_superadmin() {
        let tenant_id = user.tenant_id.ok_or(AuthError::TenantNotFound)?;
        let tenant = state
            .directory
            .find_tenant(tenant_id)
            .ok_or(AuthError::TenantNotFound)?;
        if !tenant.status.is_active() {
            tracing::debug!(%tenant_id, status = %tenant.status, "request rejected: tenant not active");
            return Err(AuthError::InactiveTenant.into());
        }
        req.extensions_mut().insert(TenantContext::new(tenant));
    }

    req.extensions_mut().insert(AuthContext::new(user.sanitized()));

    Ok(next.run(req).await)
}
