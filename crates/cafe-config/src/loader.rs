//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::CafeConfig;

/// Prefix for environment overrides, e.g. `CAFE_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "CAFE_";

/// Top-level sections of `CafeConfig`. Other `CAFE_*` variables are ignored.
const SECTIONS: [&str; 4] = ["server", "store", "auth", "logging"];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`CAFE_` prefix, `__` between section and key)
pub fn load_config(config_path: Option<&str>) -> Result<CafeConfig, ConfigError> {
    figment(config_path)
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

/// Parses configuration from TOML text layered over the defaults.
///
/// This is a pure transformation: no file or environment access.
pub fn parse_config_str(content: &str) -> Result<CafeConfig, ConfigError> {
    Figment::from(Serialized::defaults(CafeConfig::default()))
        .merge(Toml::string(content))
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

fn figment(config_path: Option<&str>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(CafeConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment.merge(
        Env::prefixed(ENV_PREFIX)
            .filter(|key| is_section_key(key.as_str()))
            .split("__"),
    )
}

/// Whether an env key (prefix stripped) targets a known config section.
fn is_section_key(key: &str) -> bool {
    key.split_once("__")
        .is_some_and(|(section, _)| SECTIONS.iter().any(|s| section.eq_ignore_ascii_case(s)))
}
