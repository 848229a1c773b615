//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.groundcrew/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::feature::{Feature, MenuId, default_features};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GroundcrewConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// `None` when the file has no `[[features]]`; the built-in catalog is
    /// used then. An explicit empty list stays empty.
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_feature: Option<String>,
    pub base_url: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOG_FILE: &str = "groundcrew.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub features: Vec<Feature>,
    /// Feature to select at startup. `None` keeps the first one.
    pub initial_feature: Option<String>,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("feature '{feature}' declares menu id {id} more than once")]
    DuplicateMenuId { feature: String, id: MenuId },
    #[error("feature '{0}' is declared more than once")]
    DuplicateFeature(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.groundcrew/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".groundcrew").join("config.toml"))
}

/// Load config from `~/.groundcrew/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GroundcrewConfig::default()`.
pub fn load_config() -> Result<GroundcrewConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GroundcrewConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GroundcrewConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GroundcrewConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: GroundcrewConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# GroundCrew Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_feature = "VerifAI"              # Or set GROUNDCREW_FEATURE
# base_url = "http://localhost:8000/api"   # Or set GROUNDCREW_BASE_URL
# log_file = "groundcrew.log"

# Declaring any [[features]] replaces the built-in catalog.
# Menu ids must be unique within a feature; order is display order.

# [[features]]
# name = "VerifAI"
#
# [[features.menus]]
# id = 1
# name = "Fact check"
# url = "/verifai/run"
# icon = "search"
#
# [[features.menus]]
# id = 2
# name = "Modes"
# url = "/verifai/modes"
# icon = "list"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

pub const FEATURE_ENV: &str = "GROUNDCREW_FEATURE";
pub const BASE_URL_ENV: &str = "GROUNDCREW_BASE_URL";

/// Environment lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_feature` and `cli_base_url` are from CLI flags (None = not specified).
/// `env` looks up environment variables; `main` passes [`process_env`].
pub fn resolve(
    config: &GroundcrewConfig,
    cli_feature: Option<&str>,
    cli_base_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let features = config.features.clone().unwrap_or_else(default_features);
    validate_features(&features)?;

    // Feature: CLI → env → config
    let requested = cli_feature
        .map(|s| s.to_string())
        .or_else(|| env(FEATURE_ENV))
        .or_else(|| config.general.default_feature.clone());
    let initial_feature = match requested {
        Some(name) if features.iter().any(|f| f.name == name) => Some(name),
        Some(name) => {
            warn!("Unknown feature '{}', starting on the first feature", name);
            None
        }
        None => None,
    };

    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| env(BASE_URL_ENV))
        .or_else(|| config.general.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(ResolvedConfig {
        features,
        initial_feature,
        base_url,
    })
}

/// Log file path: CLI → config → default.
pub fn resolve_log_file(config: &GroundcrewConfig, cli_log_file: Option<&str>) -> String {
    cli_log_file
        .map(|s| s.to_string())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

fn validate_features(features: &[Feature]) -> Result<(), ConfigError> {
    // Features are looked up and keyed by name.
    for (i, feature) in features.iter().enumerate() {
        if features[..i].iter().any(|f| f.name == feature.name) {
            return Err(ConfigError::DuplicateFeature(feature.name.clone()));
        }
        if let Some(id) = feature.duplicate_id() {
            return Err(ConfigError::DuplicateMenuId {
                feature: feature.name.clone(),
                id,
            });
        }
        if let Some(name) = feature.duplicate_name() {
            warn!(
                "Feature '{}' has more than one menu named '{}'",
                feature.name, name
            );
        }
    }
    Ok(())
}
