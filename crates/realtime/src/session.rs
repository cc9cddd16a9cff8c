//! Per-connection state machine.
//!
//! A connection moves `Connected → Authenticated → Disconnected`. One that
//! never authenticates stays in `Connected` and receives no targeted
//! events. Malformed authenticate signals are ignored silently: no binding
//! is created and no error frame is sent.

use std::sync::Arc;

use staffhub_core::UserId;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::{ClientSignal, RealtimeEvent};
use crate::registry::{ConnectionId, RealtimeRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Authenticated(UserId),
    Disconnected,
}

/// Tracks one transport connection's binding against the registry.
///
/// The transport (websocket loop) feeds inbound frames to
/// [`RealtimeSession::handle_text`] and must call
/// [`RealtimeSession::disconnect`] when the connection closes.
pub struct RealtimeSession {
    id: ConnectionId,
    state: SessionState,
    registry: Arc<RealtimeRegistry>,
    tx: UnboundedSender<RealtimeEvent>,
}

impl RealtimeSession {
    pub fn new(registry: Arc<RealtimeRegistry>, tx: UnboundedSender<RealtimeEvent>) -> Self {
        Self {
            id: ConnectionId::new(),
            state: SessionState::Connected,
            registry,
            tx,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Process one inbound text frame.
    ///
    /// Unparseable frames are dropped. Re-authenticating as a different
    /// user moves the binding; re-authenticating as the same user is a
    /// no-op thanks to the registry's idempotent bind.
    pub fn handle_text(&mut self, raw: &str) {
        if self.state == SessionState::Disconnected {
            return;
        }

        let signal: ClientSignal = match serde_json::from_str(raw) {
            Ok(signal) => signal,
            Err(e) => {
                tracing::debug!(conn_id = %self.id, "ignoring malformed client signal: {e}");
                return;
            }
        };

        match signal {
            ClientSignal::Authenticate { user_id } => self.authenticate(user_id),
        }
    }

    fn authenticate(&mut self, user_id: UserId) {
        if let SessionState::Authenticated(previous) = self.state {
            if previous == user_id {
                return;
            }
            self.registry.unbind(previous, self.id);
        }
        self.registry.bind(user_id, self.id, self.tx.clone());
        self.state = SessionState::Authenticated(user_id);
    }

    /// Terminal transition; unbinds from the registry.
    pub fn disconnect(&mut self) {
        if let SessionState::Authenticated(user_id) = self.state {
            self.registry.unbind(user_id, self.id);
        }
        self.state = SessionState::Disconnected;
    }
}

impl Drop for RealtimeSession {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use uuid::Uuid;

    fn event() -> RealtimeEvent {
        RealtimeEvent::NewLeaveRequest {
            message: "New leave request from Ada".to_string(),
            leave_request_id: Uuid::nil(),
            employee: "Ada".to_string(),
        }
    }

    #[test]
    fn unauthenticated_connection_receives_nothing() {
        let registry = Arc::new(RealtimeRegistry::new());
        let (tx, mut rx) = unbounded_channel();
        let session = RealtimeSession::new(registry.clone(), tx);

        assert_eq!(session.state(), SessionState::Connected);
        registry.deliver(UserId::new(), &event());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn authenticate_binds_and_disconnect_unbinds() {
        let registry = Arc::new(RealtimeRegistry::new());
        let user = UserId::new();
        let (tx, mut rx) = unbounded_channel();
        let mut session = RealtimeSession::new(registry.clone(), tx);

        session.handle_text(&format!(
            r#"{{"event":"authenticate","user_id":"{user}"}}"#
        ));
        assert_eq!(session.state(), SessionState::Authenticated(user));
        assert_eq!(registry.deliver(user, &event()), 1);
        assert!(rx.try_recv().is_ok());

        session.disconnect();
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(registry.deliver(user, &event()), 0);
    }

    #[test]
    fn double_authenticate_does_not_duplicate_routing() {
        let registry = Arc::new(RealtimeRegistry::new());
        let user = UserId::new();
        let (tx, mut rx) = unbounded_channel();
        let mut session = RealtimeSession::new(registry.clone(), tx);

        let frame = format!(r#"{{"event":"authenticate","user_id":"{user}"}}"#);
        session.handle_text(&frame);
        session.handle_text(&frame);

        assert_eq!(registry.connections(user), 1);
        assert_eq!(registry.deliver(user, &event()), 1);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reauthenticating_as_other_user_moves_binding() {
        let registry = Arc::new(RealtimeRegistry::new());
        let (first, second) = (UserId::new(), UserId::new());
        let (tx, _rx) = unbounded_channel();
        let mut session = RealtimeSession::new(registry.clone(), tx);

        session.handle_text(&format!(
            r#"{{"event":"authenticate","user_id":"{first}"}}"#
        ));
        session.handle_text(&format!(
            r#"{{"event":"authenticate","user_id":"{second}"}}"#
        ));

        assert_eq!(registry.connections(first), 0);
        assert_eq!(registry.connections(second), 1);
    }

    #[test]
    fn malformed_signal_creates_no_binding() {
        let registry = Arc::new(RealtimeRegistry::new());
        let (tx, _rx) = unbounded_channel();
        let mut session = RealtimeSession::new(registry.clone(), tx);

        session.handle_text("not json");
        session.handle_text(r#"{"event":"authenticate"}"#);
        session.handle_text(r#"{"event":"authenticate","user_id":"nope"}"#);

        assert_eq!(session.state(), SessionState::Connected);
    }
}
