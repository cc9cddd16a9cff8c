//! User records for identity management.
//!
//! # Invariants
//! - A non-superadmin user belongs to exactly one tenant.
//! - A superadmin user has no tenant reference.
//! - Only the sanitized [`AuthUser`] shape may be attached to request
//!   context; the stored record carries the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staffhub_core::{TenantId, UserId};

use crate::role::Role;

/// Stored user record (includes sensitive fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// None only for superadmin.
    pub tenant_id: Option<TenantId>,
    pub email: String,
    pub display_name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_superadmin(&self) -> bool {
        self.role.is_superadmin()
    }

    /// Strip sensitive fields for request-context attachment.
    pub fn sanitized(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            tenant_id: self.tenant_id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

/// Authenticated-user object handed to route handlers.
///
/// Handlers must not re-derive authorization decisions from this; the
/// middleware chain has already made them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub tenant_id: Option<TenantId>,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_superadmin(&self) -> bool {
        self.role.is_superadmin()
    }
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        user.sanitized()
    }
}
