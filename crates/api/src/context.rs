//! Request context attached by the auth middleware.

use staffhub_auth::{AuthUser, Tenant};

/// Authenticated-identity context (sensitive fields already stripped).
///
/// Present on every request that passed the middleware chain.
#[derive(Debug, Clone)]
pub struct AuthContext {
    user: AuthUser,
}

impl AuthContext {
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    pub fn is_superadmin(&self) -> bool {
        self.user.is_superadmin()
    }
}

/// Tenant context for a request.
///
/// Absent for superadmin requests, which are never tenant-scoped.
#[derive(Debug, Clone)]
pub struct TenantContext {
    tenant: Tenant,
}

impl TenantContext {
    pub fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }
}
