//! `staffhub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it holds the
//! role model, user/tenant records, password verification, claims validation
//! and the error taxonomy. Transports (cookies, headers, websockets) and
//! stores live elsewhere.

pub mod claims;
pub mod error;
pub mod password;
pub mod role;
pub mod tenant;
pub mod user;

pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use error::AuthError;
pub use password::{hash_password, verify_login_password, verify_password};
pub use role::{Role, require_role};
pub use tenant::{Tenant, TenantSettings, TenantStatus};
pub use user::{AuthUser, User};
