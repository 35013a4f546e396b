//! Session use cases.
//!
//! Owns the persisted profile for the lifetime of a session.

mod context;

pub use context::SessionContext;
