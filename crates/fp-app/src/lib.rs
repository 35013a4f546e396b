//! FormPilot Application Orchestration Layer
//!
//! This crate contains the use cases and orchestrators that drive the
//! `fp-core` state machines against injected ports.

pub mod builder;
pub mod deps;
pub mod usecases;

pub use builder::App;
pub use deps::AppDeps;
