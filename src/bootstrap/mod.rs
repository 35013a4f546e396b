pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_empty, resolve_config_path, CONFIG_ENV};
pub use wiring::{build_app, WiringError};
