//! `staffhub-infra` — storage abstractions for the identity layer.
//!
//! The user/tenant store is externally synchronized; this layer only reads
//! it per request. The in-memory implementation exists for dev/test wiring.

pub mod directory;

pub use directory::{Directory, InMemoryDirectory};
