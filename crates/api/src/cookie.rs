//! Credential cookie construction.
//!
//! HTTP-only, path `/`, lifetime matching the token. Production tightens
//! the attributes: `Secure` and `SameSite=Strict`; development uses
//! `SameSite=Lax` without `Secure` so plain-HTTP local setups work.

use axum::http::HeaderValue;
use chrono::Duration;

use crate::config::{AppConfig, Environment};

pub fn session_cookie(config: &AppConfig, token: &str) -> HeaderValue {
    let attributes = cookie_attributes(config.environment, config.token_lifetime);
    // Token is base64url JWT material, always header-safe.
    HeaderValue::from_str(&format!("{}={token}; {attributes}", config.cookie_name))
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

pub fn clear_cookie(config: &AppConfig) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; {}",
        config.cookie_name,
        cookie_attributes(config.environment, Duration::zero()),
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

fn cookie_attributes(environment: Environment, lifetime: Duration) -> String {
    let max_age = lifetime.num_seconds().max(0);
    match environment {
        Environment::Production => {
            format!("HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={max_age}")
        }
        Environment::Development => {
            format!("HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}")
        }
    }
}
