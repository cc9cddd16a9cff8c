//! Concrete credential verifiers.
//!
//! Two verification capabilities behind one trait shape: password-based
//! (login) and token-based (per-request). No registry of strategies; the
//! call sites pick the verifier they need.

use std::sync::Arc;

use staffhub_auth::{AuthError, User, verify_login_password};
use staffhub_infra::Directory;

use crate::token::TokenCodec;

/// Verification capability: credentials in, identity out.
pub trait VerifyCredentials: Send + Sync {
    type Credentials;

    fn verify(&self, credentials: &Self::Credentials) -> Result<User, AuthError>;
}

/// Email/password login credentials.
#[derive(Debug, Clone)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

/// Password-based verifier backing the login route.
///
/// Exact email lookup, constant-time hash comparison; unknown email and
/// wrong password are indistinguishable in the result.
pub struct PasswordVerifier<D> {
    directory: D,
}

impl<D: Directory> PasswordVerifier<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }
}

impl<D: Directory> VerifyCredentials for PasswordVerifier<D> {
    type Credentials = PasswordCredentials;

    fn verify(&self, credentials: &Self::Credentials) -> Result<User, AuthError> {
        let user = self.directory.find_user_by_email(&credentials.email);
        verify_login_password(user.as_ref(), &credentials.password)
    }
}

/// Raw signed token, as resolved from a cookie or bearer header.
#[derive(Debug, Clone)]
pub struct TokenCredentials(pub String);

/// Token-based verifier run on every protected request.
///
/// Decodes and validates the token, then resolves the subject to a live
/// user record. State is re-read on every call; nothing caches a prior
/// validation.
pub struct TokenVerifier<D> {
    directory: D,
    codec: Arc<TokenCodec>,
}

impl<D: Directory> TokenVerifier<D> {
    pub fn new(directory: D, codec: Arc<TokenCodec>) -> Self {
        Self { directory, codec }
    }
}

impl<D: Directory> VerifyCredentials for TokenVerifier<D> {
    type Credentials = TokenCredentials;

    fn verify(&self, credentials: &Self::Credentials) -> Result<User, AuthError> {
        let claims = self.codec.decode(&credentials.0)?;

        let user = self
            .directory
            .find_user(claims.sub)
            .ok_or(AuthError::Unauthenticated)?;
        if !user.active {
            return Err(AuthError::InactiveAccount);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use staffhub_auth::{Role, hash_password};
    use staffhub_core::{TenantId, UserId};
    use staffhub_infra::InMemoryDirectory;

    fn seeded_directory(password: &str) -> (Arc<InMemoryDirectory>, User) {
        let directory = Arc::new(InMemoryDirectory::new());
        let user = User {
            id: UserId::new(),
            tenant_id: Some(TenantId::new()),
            email: "a@x.com".to_string(),
            display_name: "A".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::Employee,
            active: true,
            created_at: Utc::now(),
        };
        directory.upsert_user(user.clone());
        (directory, user)
    }

    #[test]
    fn password_verifier_scenario_triplet() {
        let (directory, user) = seeded_directory("correct");
        let verifier = PasswordVerifier::new(directory);

        let ok = verifier
            .verify(&PasswordCredentials {
                email: "a@x.com".to_string(),
                password: "correct".to_string(),
            })
            .unwrap();
        assert_eq!(ok.id, user.id);

        let wrong = verifier
            .verify(&PasswordCredentials {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .unwrap_err();
        let unknown = verifier
            .verify(&PasswordCredentials {
                email: "nouser@x.com".to_string(),
                password: "correct".to_string(),
            })
            .unwrap_err();
        assert_eq!(wrong, AuthError::InvalidCredentials);
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn token_verifier_rechecks_account_state() {
        let (directory, user) = seeded_directory("pw");
        let codec = Arc::new(TokenCodec::new(b"secret", Duration::hours(24)));
        let verifier = TokenVerifier::new(directory.clone(), codec.clone());
        let token = TokenCredentials(codec.issue(user.id).unwrap());

        assert!(verifier.verify(&token).is_ok());

        directory.set_user_active(user.id, false);
        assert_eq!(verifier.verify(&token), Err(AuthError::InactiveAccount));
    }

    #[test]
    fn token_for_missing_subject_is_unauthenticated() {
        let (directory, _) = seeded_directory("pw");
        let codec = Arc::new(TokenCodec::new(b"secret", Duration::hours(24)));
        let verifier = TokenVerifier::new(directory, codec.clone());
        let token = TokenCredentials(codec.issue(UserId::new()).unwrap());

        assert_eq!(verifier.verify(&token), Err(AuthError::Unauthenticated));
    }
}
