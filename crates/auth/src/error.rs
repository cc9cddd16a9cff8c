//! Error taxonomy for the identity layer.

use thiserror::Error;

use crate::role::Role;

/// Authentication/authorization failure.
///
/// Every variant is terminal for the request it occurred in; none is fatal
/// to the process. The HTTP mapping (401 vs 403) lives at the API boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login lookup or password mismatch.
    ///
    /// The message is identical whether the email is unknown or the password
    /// is wrong, so a caller cannot enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No credential was presented on the request.
    #[error("authentication required")]
    Unauthenticated,

    /// A credential was presented but its signature, shape or expiry is bad.
    #[error("invalid or expired token")]
    TokenInvalid,

    /// The subject resolved to a disabled account.
    #[error("account is deactivated")]
    InactiveAccount,

    /// The caller's tenant record is missing.
    #[error("tenant not found")]
    TenantNotFound,

    /// The caller's tenant is not active.
    #[error("tenant is not active")]
    InactiveTenant,

    /// A tenant-scoped resource was referenced outside the caller's tenant.
    #[error("cross-tenant access denied")]
    CrossTenantAccess,

    /// The caller's role is not in the route's allowed set.
    #[error("forbidden: requires one of {required:?}")]
    Forbidden { required: Vec<Role> },
}

impl AuthError {
    /// Stable machine-readable code for wire payloads and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::TokenInvalid => "token_invalid",
            AuthError::InactiveAccount => "inactive_account",
            AuthError::TenantNotFound => "tenant_not_found",
            AuthError::InactiveTenant => "inactive_tenant",
            AuthError::CrossTenantAccess => "cross_tenant_access",
            AuthError::Forbidden { .. } => "forbidden",
        }
    }
}
