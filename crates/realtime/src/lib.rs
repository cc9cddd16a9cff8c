//! `staffhub-realtime` — targeted real-time event delivery.
//!
//! The registry is an explicit component constructed once at process start
//! and shared by handle; there is no ambient global socket state. Delivery
//! is best-effort: no persistence, no replay, a disconnected user misses
//! events emitted while offline.

pub mod event;
pub mod registry;
pub mod session;

pub use event::{ClientSignal, RealtimeEvent};
pub use registry::{ConnectionId, RealtimeRegistry};
pub use session::{RealtimeSession, SessionState};
