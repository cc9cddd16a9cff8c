//! Role model used for RBAC.
//!
//! Roles are a fixed enumeration at this layer; there is no permission
//! lattice. A route declares an allowed-role set and the gate checks
//! membership.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use staffhub_core::DomainError;

use crate::error::AuthError;

/// Role of an authenticated identity.
///
/// `Superadmin` is the only role with no tenant affiliation; it bypasses
/// tenant scoping entirely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Hr,
    Manager,
    Employee,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Superadmin,
        Role::Admin,
        Role::Hr,
        Role::Manager,
        Role::Employee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, Role::Superadmin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::Superadmin),
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// Role-set membership gate (pure policy check).
///
/// An empty allowed set admits any authenticated role. A non-empty set
/// admits only its members; the returned error names the required set,
/// which is safe to disclose (it leaks policy, not data).
///
/// - No IO
/// - No panics
pub fn require_role(role: Role, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.is_empty() || allowed.contains(&role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: allowed.to_vec(),
        })
    }
}
