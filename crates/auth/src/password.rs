//! Password hashing and credential verification.
//!
//! Hashes are Argon2id PHC strings. Verification is constant-time within
//! argon2 itself; the login path additionally burns a comparable amount of
//! work when the email is unknown, so the two failure modes are
//! indistinguishable by error shape and by cost.

use std::sync::OnceLock;

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use crate::error::AuthError;
use crate::user::User;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Hash a plaintext password into an Argon2id PHC string.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordHashError::Hash(e.to_string()))?;
    Ok(phc.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash of a throwaway password, verified against when the email lookup
/// misses so the unknown-email path costs the same as a mismatch.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| {
        hash_password("staffhub-dummy-credential").unwrap_or_else(|_| String::new())
    })
}

/// Check a login attempt against an optional stored user.
///
/// `user` is the result of an exact email lookup (case-sensitive, as
/// stored). Unknown email and password mismatch return the **identical**
/// error, kind and message both.
pub fn verify_login_password(user: Option<&User>, password: &str) -> Result<User, AuthError> {
    match user {
        Some(user) => {
            if verify_password(&user.password_hash, password) {
                Ok(user.clone())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
        None => {
            let _ = verify_password(dummy_hash(), password);
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use chrono::Utc;
    use staffhub_core::{TenantId, UserId};

    fn stored_user(password: &str) -> User {
        User {
            id: UserId::new(),
            tenant_id: Some(TenantId::new()),
            email: "a@x.com".to_string(),
            display_name: "A".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::Employee,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("correct").unwrap();
        assert!(verify_password(&hash, "correct"));
        assert!(!verify_password(&hash, "wrong"));
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(!verify_password("not-a-phc-string", "anything"));
    }

    #[test]
    fn login_success_returns_user() {
        let user = stored_user("correct");
        let out = verify_login_password(Some(&user), "correct").unwrap();
        assert_eq!(out.id, user.id);
    }

    #[test]
    fn wrong_password_and_unknown_email_are_identical_errors() {
        let user = stored_user("correct");
        let wrong = verify_login_password(Some(&user), "wrong").unwrap_err();
        let unknown = verify_login_password(None, "correct").unwrap_err();
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.to_string(), unknown.to_string());
    }
}
