pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding `api.origin`.
pub const ORIGIN_ENV: &str = "FOLIO_API_ORIGIN";

const DEFAULT_PATHS: [&str; 3] = ["./folio.toml", "./config.toml", "~/.config/folio/config.toml"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    if let Some(path) = find_default_config() {
        return load_config(&path);
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// First existing file among the default locations.
pub fn find_default_config() -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
        .find(|p| p.exists())
}

/// Where `login --save` writes when no config path was given.
pub fn default_save_path() -> PathBuf {
    find_default_config().unwrap_or_else(|| PathBuf::from("./folio.toml"))
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(origin) = std::env::var(ORIGIN_ENV) {
        if !origin.trim().is_empty() {
            tracing::debug!("Using API origin from {}", ORIGIN_ENV);
            config.api.origin = origin.trim().to_string();
        }
    }
    config.api.origin = config.api.normalized_origin().to_string();
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let origin = &config.api.origin;
    if !folio_media::is_absolute_http(origin) {
        anyhow::bail!("API origin must start with http:// or https://, got '{}'", origin);
    }

    if config.api.timeout_secs == 0 {
        anyhow::bail!("API timeout cannot be 0");
    }

    if config.upload.max_file_mb == 0 {
        anyhow::bail!("Upload size limit cannot be 0");
    }

    if matches!(config.api.token.as_deref(), Some(t) if t.trim().is_empty()) {
        tracing::warn!("Config has an empty API token; admin commands will be rejected");
    }

    Ok(())
}
