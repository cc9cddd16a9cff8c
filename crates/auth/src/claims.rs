//! Access-token claims model (transport-agnostic).
//!
//! This is the minimal set of claims carried by a signed credential once it
//! has been decoded/verified by the transport layer. Signature verification
//! and encoding are intentionally outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use staffhub_core::UserId;

/// Claims of an access token: `{subject, issued-at, expiry}`.
///
/// Role and tenant are deliberately **not** claims; they are re-read from
/// the directory on every request, so account changes take effect on the
/// next request without revocation machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user identifier).
    pub sub: UserId,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claims time window.
///
/// Note: this validates the *claims* only; the caller has already checked
/// the signature.
pub fn validate_claims(
    claims: &AccessClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn claims(issued_offset_s: i64, expires_offset_s: i64, now: DateTime<Utc>) -> AccessClaims {
        AccessClaims {
            sub: UserId::new(),
            issued_at: now + Duration::seconds(issued_offset_s),
            expires_at: now + Duration::seconds(expires_offset_s),
        }
    }

    #[test]
    fn current_window_is_valid() {
        let now = Utc::now();
        assert!(validate_claims(&claims(-60, 60, now), now).is_ok());
    }

    #[test]
    fn expired_claims_are_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(-120, -60, now), now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn future_issuance_is_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(60, 120, now), now),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims(60, -60, now), now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    proptest! {
        /// Property: claims validate exactly when now falls inside a
        /// well-formed [issued_at, expires_at) window.
        #[test]
        fn window_membership_decides_validity(
            issued in -86_400i64..86_400,
            expires in -86_400i64..86_400,
        ) {
            let now = Utc::now();
            let c = claims(issued, expires, now);
            let expected_ok = expires > issued && issued <= 0 && expires > 0;
            prop_assert_eq!(validate_claims(&c, now).is_ok(), expected_ok);
        }
    }
}
