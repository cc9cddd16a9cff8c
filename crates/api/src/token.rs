//! Signed token issuance and decoding (HS256).
//!
//! The wire format carries `{sub, iat, exp}` only; the domain claims model
//! and its deterministic window validation live in `staffhub-auth`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use staffhub_auth::{AccessClaims, AuthError, validate_claims};
use staffhub_core::UserId;

/// JWT wire claims (numeric timestamps per RFC 7519).
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and decodes access tokens with a server-held secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; the default 60s leeway would let stale tokens by.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime,
            validation,
        }
    }

    /// Mint a signed token for a subject.
    pub fn issue(&self, subject: UserId) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issuance with an explicit clock, for tests that need stale tokens.
    pub fn issue_at(&self, subject: UserId, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = WireClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::warn!("token encoding failed: {e}");
            AuthError::TokenInvalid
        })
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Every failure mode (bad signature, malformed, expired, bad subject)
    /// collapses to `TokenInvalid`; a presented-but-bad credential never
    /// reveals which check tripped.
    pub fn decode(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<WireClaims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature | ErrorKind::InvalidSignature => {}
                other => tracing::debug!("token rejected: {other:?}"),
            }
            AuthError::TokenInvalid
        })?;

        let sub: UserId = data.claims.sub.parse().map_err(|_| AuthError::TokenInvalid)?;
        let issued_at = Utc
            .timestamp_opt(data.claims.iat, 0)
            .single()
            .ok_or(AuthError::TokenInvalid)?;
        let expires_at = Utc
            .timestamp_opt(data.claims.exp, 0)
            .single()
            .ok_or(AuthError::TokenInvalid)?;

        let claims = AccessClaims {
            sub,
            issued_at,
            expires_at,
        };
        validate_claims(&claims, Utc::now()).map_err(|_| AuthError::TokenInvalid)?;

        Ok(claims)
    }
}
