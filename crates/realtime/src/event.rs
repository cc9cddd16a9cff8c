//! Wire types for the real-time channel.

use serde::{Deserialize, Serialize};
use staffhub_core::UserId;
use uuid::Uuid;

/// Server → client signals.
///
/// Each carries a human-readable message plus a minimal structured payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RealtimeEvent {
    /// A leave request the recipient filed changed status.
    LeaveStatusUpdate {
        message: String,
        leave_request_id: Uuid,
        status: String,
    },
    /// A new leave request awaits the recipient's review.
    NewLeaveRequest {
        message: String,
        leave_request_id: Uuid,
        employee: String,
    },
}

impl RealtimeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            RealtimeEvent::LeaveStatusUpdate { .. } => "leave-status-update",
            RealtimeEvent::NewLeaveRequest { .. } => "new-leave-request",
        }
    }
}

/// Client → server signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientSignal {
    /// Bind this connection to the given user's room.
    Authenticate { user_id: UserId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_kebab_tagged() {
        let event = RealtimeEvent::NewLeaveRequest {
            message: "New leave request from Ada".to_string(),
            leave_request_id: Uuid::nil(),
            employee: "Ada".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "new-leave-request");
        assert_eq!(event.kind(), "new-leave-request");
    }

    #[test]
    fn authenticate_signal_parses() {
        let id = UserId::new();
        let raw = format!(r#"{{"event":"authenticate","user_id":"{id}"}}"#);
        let signal: ClientSignal = serde_json::from_str(&raw).unwrap();
        assert_eq!(signal, ClientSignal::Authenticate { user_id: id });
    }

    #[test]
    fn unknown_signal_fails_to_parse() {
        assert!(serde_json::from_str::<ClientSignal>(r#"{"event":"ping"}"#).is_err());
    }
}
