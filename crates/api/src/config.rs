//! Runtime configuration for the API server.

use chrono::Duration;

/// Deployment environment; tightens cookie attributes in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Which credential transport wins when both are present.
///
/// Cookie-first is canonical (first-party browser clients); the bearer
/// header path exists for non-browser or cross-origin integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportOrder {
    CookieFirst,
    HeaderFirst,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_lifetime: Duration,
    pub cookie_name: String,
    pub environment: Environment,
    pub transport_order: TransportOrder,
    pub bind_addr: String,
}

impl AppConfig {
    pub const DEFAULT_COOKIE_NAME: &'static str = "staffhub_token";

    /// Read configuration from the environment.
    ///
    /// `STAFFHUB_JWT_SECRET` is required in spirit; a missing value falls
    /// back to an insecure dev default and logs a warning, matching local
    /// development ergonomics.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("STAFFHUB_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("STAFFHUB_JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let environment = match std::env::var("STAFFHUB_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let token_lifetime_hours = std::env::var("STAFFHUB_TOKEN_LIFETIME_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        let bind_addr =
            std::env::var("STAFFHUB_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            jwt_secret,
            token_lifetime: Duration::hours(token_lifetime_hours),
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            environment,
            transport_order: TransportOrder::CookieFirst,
            bind_addr,
        }
    }

    /// Test/dev construction with explicit secret, defaults elsewhere.
    pub fn for_dev(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_lifetime: Duration::hours(24),
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            environment: Environment::Development,
            transport_order: TransportOrder::CookieFirst,
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}
