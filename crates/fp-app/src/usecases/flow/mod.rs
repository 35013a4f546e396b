//! Route flow use cases.

pub mod coordinator;

pub use coordinator::{FlowCoordinator, FlowError};
