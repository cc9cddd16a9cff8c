//! Thin collaborator routes.
//!
//! These demonstrate the collaborator contract: handlers receive attached
//! context, route explicit tenant references through the scope check, and
//! hand realtime notifications to the registry. Leave-balance arithmetic
//! and payroll rules live outside this layer.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use staffhub_core::{TenantId, UserId};
use staffhub_realtime::RealtimeEvent;

use crate::app::AppServices;
use crate::authz::ensure_tenant_scope;
use crate::context::AuthContext;
use crate::errors::ApiError;

/// GET /tenants/:tenant_id/employees
///
/// Role gate (admin|hr|manager) is layered on the route group.
pub async fn list_employees(
    State(services): State<AppServices>,
    Extension(auth): Extension<AuthContext>,
    Path(tenant_id): Path<TenantId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    ensure_tenant_scope(&auth, tenant_id)?;

    let employees: Vec<_> = services
        .directory
        .list_users(tenant_id)
        .iter()
        .map(|u| u.sanitized())
        .collect();
    Ok(Json(json!({ "employees": employees })))
}

#[derive(Debug, Deserialize)]
pub struct CreateLeaveRequest {
    pub approver_id: UserId,
    pub reason: String,
}

/// POST /tenants/:tenant_id/leave-requests
///
/// Any authenticated role; notifies the named approver in real time.
pub async fn create_leave_request(
    State(services): State<AppServices>,
    Extension(auth): Extension<AuthContext>,
    Path(tenant_id): Path<TenantId>,
    Json(body): Json<CreateLeaveRequest>,
) -> Result<Response, ApiError> {
    ensure_tenant_scope(&auth, tenant_id)?;

    let leave_request_id = Uuid::now_v7();
    let employee = auth.user().display_name.clone();
    let delivered = services.registry.deliver(
        body.approver_id,
        &RealtimeEvent::NewLeaveRequest {
            message: format!("New leave request from {employee}: {}", body.reason),
            leave_request_id,
            employee,
        },
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "id": leave_request_id, "delivered": delivered })),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatus {
    pub employee_id: UserId,
    pub status: String,
    /// Optional explicit tenant reference; cross-checked like a path param.
    pub tenant_id: Option<TenantId>,
}

/// PATCH /leave-requests/:id/status
///
/// Role gate (admin|hr|manager); notifies the affected employee.
pub async fn update_leave_status(
    State(services): State<AppServices>,
    Extension(auth): Extension<AuthContext>,
    Path(leave_request_id): Path<Uuid>,
    Json(body): Json<UpdateLeaveStatus>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(tenant_id) = body.tenant_id {
        ensure_tenant_scope(&auth, tenant_id)?;
    }

    let delivered = services.registry.deliver(
        body.employee_id,
        &RealtimeEvent::LeaveStatusUpdate {
            message: format!("Your leave request is now {}", body.status),
            leave_request_id,
            status: body.status.clone(),
        },
    );

    Ok(Json(json!({ "delivered": delivered })))
}
