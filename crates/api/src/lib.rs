//! HTTP/websocket surface of the identity layer.
//!
//! Request chain: credential resolution (cookie or bearer) → identity load →
//! tenant scope → role gate → handler. The websocket endpoint shares the
//! same process-wide realtime registry.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod cookie;
pub mod errors;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod token;
pub mod verify;
pub mod ws;
