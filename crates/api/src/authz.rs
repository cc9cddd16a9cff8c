//! Route-boundary authorization: role gates and tenant-scope checks.
//!
//! Enforced before handlers run; handlers receive already-authorized
//! context and must not re-derive these decisions.

use axum::{extract::Request, middleware::Next, response::Response};

use staffhub_auth::{AuthError, Role, require_role};
use staffhub_core::TenantId;

use crate::context::AuthContext;
use crate::errors::ApiError;

/// Role gate middleware body; layer it per route group with a closure:
///
/// ```ignore
/// .route_layer(axum::middleware::from_fn(|req, next| {
///     role_gate(&[Role::Admin, Role::Hr], req, next)
/// }))
/// ```
pub async fn role_gate(
    allowed: &'static [Role],
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(AuthError::Unauthenticated)?;
    require_role(auth.user().role, allowed)?;
    Ok(next.run(req).await)
}

/// Scope check for explicit tenant references (path params, body
/// fields): the referenced tenant must be the caller's own. Superadmin
/// references are used verbatim without cross-checking.
pub fn ensure_tenant_scope(auth: &AuthContext, referenced: TenantId) -> Result<(), AuthError> {
    if auth.is_superadmin() {
        return Ok(());
    }
    match auth.user().tenant_id {
        Some(own) if own == referenced => Ok(()),
        _ => Err(AuthError::CrossTenantAccess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_auth::AuthUser;
    use staffhub_core::UserId;

    fn auth(role: Role, tenant_id: Option<TenantId>) -> AuthContext {
        AuthContext::new(AuthUser {
            id: UserId::new(),
            tenant_id,
            email: "a@x.com".to_string(),
            display_name: "A".to_string(),
            role,
        })
    }

    #[test]
    fn own_tenant_reference_passes() {
        let tenant = TenantId::new();
        let ctx = auth(Role::Admin, Some(tenant));
        assert!(ensure_tenant_scope(&ctx, tenant).is_ok());
    }

    #[test]
    fn foreign_tenant_reference_is_cross_tenant_even_if_tenant_is_valid() {
        let ctx = auth(Role::Admin, Some(TenantId::new()));
        assert_eq!(
            ensure_tenant_scope(&ctx, TenantId::new()),
            Err(AuthError::CrossTenantAccess)
        );
    }

    #[test]
    fn superadmin_bypasses_tenant_scope() {
        let ctx = auth(Role::Superadmin, None);
        assert!(ensure_tenant_scope(&ctx, TenantId::new()).is_ok());
    }
}
