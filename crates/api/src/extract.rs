//! Credential resolution from inbound requests.
//!
//! One resolver for both transports: the named cookie and the
//! `Authorization: Bearer` header, normalized to a single outcome with
//! the precedence carried on config.

use axum::http::{HeaderMap, header};

use crate::config::TransportOrder;

/// Resolve the raw token from a request's headers, honoring transport order.
///
/// Returns `None` when neither transport carries a credential; the caller
/// maps that to `Unauthenticated`.
pub fn resolve_token(
    headers: &HeaderMap,
    cookie_name: &str,
    order: TransportOrder,
) -> Option<String> {
    let cookie = || parse_cookie(headers, cookie_name);
    let bearer = || extract_bearer(headers).map(str::to_string);

    match order {
        TransportOrder::CookieFirst => cookie().or_else(bearer),
        TransportOrder::HeaderFirst => bearer().or_else(cookie),
    }
}

/// Pull a named value out of the `Cookie` header.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Pull a non-empty token out of `Authorization: Bearer <token>`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
