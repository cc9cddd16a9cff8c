//! Room registry: user identifier → live connection senders.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use staffhub_core::UserId;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::event::RealtimeEvent;

/// Identifier of a single transport connection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

type Room = HashMap<ConnectionId, UnboundedSender<RealtimeEvent>>;

/// Maps authenticated user identifiers to their live connections.
///
/// Bind/unbind/deliver take the same write/read lock, so they are mutually
/// atomic with respect to each other for a given user identifier. Senders
/// are unbounded; a slow consumer buffers rather than blocking delivery.
#[derive(Debug, Default)]
pub struct RealtimeRegistry {
    rooms: RwLock<HashMap<UserId, Room>>,
}

impl RealtimeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a connection to a user's room. Idempotent: re-binding the same
    /// connection replaces its sender and never duplicates routing.
    pub fn bind(&self, user_id: UserId, conn_id: ConnectionId, tx: UnboundedSender<RealtimeEvent>) {
        if let Ok(mut rooms) = self.rooms.write() {
            rooms.entry(user_id).or_default().insert(conn_id, tx);
            tracing::debug!(%user_id, %conn_id, "realtime connection bound");
        }
    }

    /// Remove a connection from a user's room; drops the room when empty.
    pub fn unbind(&self, user_id: UserId, conn_id: ConnectionId) {
        if let Ok(mut rooms) = self.rooms.write() {
            if let Some(room) = rooms.get_mut(&user_id) {
                room.remove(&conn_id);
                if room.is_empty() {
                    rooms.remove(&user_id);
                }
                tracing::debug!(%user_id, %conn_id, "realtime connection unbound");
            }
        }
    }

    /// Deliver an event to every connection bound to the user's room.
    ///
    /// Best-effort: closed senders are pruned, nothing is persisted or
    /// replayed. Returns the number of connections that accepted the event.
    pub fn deliver(&self, user_id: UserId, event: &RealtimeEvent) -> usize {
        let Ok(mut rooms) = self.rooms.write() else {
            return 0;
        };
        let Some(room) = rooms.get_mut(&user_id) else {
            return 0;
        };

        let mut delivered = 0;
        room.retain(|_, tx| match tx.send(event.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(_) => false,
        });
        if room.is_empty() {
            rooms.remove(&user_id);
        }
        tracing::debug!(%user_id, kind = event.kind(), delivered, "realtime event delivered");
        delivered
    }

    /// Number of live connections in a user's room.
    pub fn connections(&self, user_id: UserId) -> usize {
        self.rooms
            .read()
            .map(|rooms| rooms.get(&user_id).map_or(0, HashMap::len))
            .unwrap_or(0)
    }
}
