//! Application wiring: services, router, middleware layers.

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post},
};

use staffhub_auth::Role;
use staffhub_infra::{Directory, InMemoryDirectory};
use staffhub_realtime::RealtimeRegistry;

use crate::authz::role_gate;
use crate::config::AppConfig;
use crate::middleware::{AuthState, auth_middleware};
use crate::routes;
use crate::token::TokenCodec;
use crate::verify::TokenVerifier;
use crate::ws::ws_handler;

/// Roles allowed on staff-management routes.
const STAFF_ROLES: &[Role] = &[Role::Superadmin, Role::Admin, Role::Hr, Role::Manager];

/// Shared services, constructed once at startup and cloned by handle.
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub codec: Arc<TokenCodec>,
    pub directory: Arc<dyn Directory>,
    pub registry: Arc<RealtimeRegistry>,
}

/// Build the app with a fresh in-memory directory (dev entry point).
pub fn build_app(config: AppConfig) -> Router {
    build_app_with(
        config,
        Arc::new(InMemoryDirectory::new()),
        Arc::new(RealtimeRegistry::new()),
    )
}

/// Build the app around externally owned services (tests seed the
/// directory and drive the registry through the same handles).
pub fn build_app_with(
    config: AppConfig,
    directory: Arc<dyn Directory>,
    registry: Arc<RealtimeRegistry>,
) -> Router {
    let config = Arc::new(config);
    let codec = Arc::new(TokenCodec::new(
        config.jwt_secret.as_bytes(),
        config.token_lifetime,
    ));

    let services = AppServices {
        config: config.clone(),
        codec: codec.clone(),
        directory: directory.clone(),
        registry,
    };

    let auth_state = AuthState {
        verifier: Arc::new(TokenVerifier::new(directory.clone(), codec)),
        directory,
        config,
    };

    // Staff-only routes carry a role gate on top of the auth chain.
    let staff = Router::new()
        .route("/tenants/:tenant_id/employees", get(routes::hr::list_employees))
        .route(
            "/leave-requests/:id/status",
            patch(routes::hr::update_leave_status),
        )
        .route_layer(from_fn(|req, next| role_gate(STAFF_ROLES, req, next)));

    // Empty allowed-role set: any authenticated identity.
    let authenticated = Router::new()
        .route("/auth/me", get(routes::auth::me))
        .route(
            "/tenants/:tenant_id/leave-requests",
            post(routes::hr::create_leave_request),
        );

    let protected = Router::new()
        .merge(staff)
        .merge(authenticated)
        .layer(from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/realtime", get(ws_handler))
        .merge(protected)
        .with_state(services)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
