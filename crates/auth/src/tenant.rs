//! Tenant records and lifecycle status.

use serde::{Deserialize, Serialize};

use staffhub_core::TenantId;

/// Tenant lifecycle status.
///
/// Created `Pending`; approved to `Active`; suspended by an administrator
/// or billing failure. Active and Suspended toggle in both directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    #[default]
    Pending,
    Active,
    Suspended,
}

impl TenantStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TenantStatus::Active)
    }
}

impl core::fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TenantStatus::Pending => "pending",
            TenantStatus::Active => "active",
            TenantStatus::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

/// Per-tenant settings carried for collaborators.
///
/// The identity layer stores and forwards these; it does not interpret them
/// beyond attaching them to request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub session_timeout_minutes: u32,
    pub require_mfa: bool,
}

impl Default for TenantSettings {
    fn default() -> Self {
        Self {
            session_timeout_minutes: 60,
            require_mfa: false,
        }
    }
}

/// Tenant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub status: TenantStatus,
    pub features: Vec<String>,
    pub settings: TenantSettings,
}

impl Tenant {
    pub fn new(id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TenantStatus::Pending,
            features: Vec::new(),
            settings: TenantSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tenant_starts_pending() {
        let t = Tenant::new(TenantId::new(), "Acme");
        assert_eq!(t.status, TenantStatus::Pending);
        assert!(!t.status.is_active());
    }

    #[test]
    fn status_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&TenantStatus::Suspended).unwrap(),
            "\"suspended\""
        );
    }
}
