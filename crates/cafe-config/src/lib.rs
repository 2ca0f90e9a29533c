//! # cafe-config
//!
//! Configuration management for the cafe service.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config_str, ConfigError};
pub use schema::{AuthConfig, CafeConfig, LoggingConfig, ServerConfig, StoreConfig};
