mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::ClipperError;
use crate::limits::{FragmentMode, Limits};
use crate::marker::Marker;
use defaults::*;

/// Top-level clipper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipper: ClipperConfig,
    /// Named destination profiles, from `[destination.<name>]` tables.
    #[serde(default = "default_destinations", rename = "destination")]
    pub destinations: BTreeMap<String, DestinationConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clipper: ClipperConfig::default(),
            destinations: default_destinations(),
        }
    }
}

impl Config {
    /// Look up a destination profile by name.
    pub fn destination(&self, name: &str) -> Result<&DestinationConfig, ClipperError> {
        self.destinations
            .get(name)
            .ok_or_else(|| ClipperError::Config(format!("unknown destination: {name}")))
    }

    /// Resolved limits of the named destination, or the default one when `None`.
    pub fn limits_for(&self, name: Option<&str>) -> Result<Limits, ClipperError> {
        let name = name.unwrap_or(&self.clipper.default_destination);
        self.destination(name)?.limits()
    }

    /// Check every destination and the default destination reference.
    pub fn validate(&self) -> Result<(), ClipperError> {
        for (name, dest) in &self.destinations {
            dest.limits()
                .map_err(|e| ClipperError::Config(format!("destination {name}: {e}")))?;
        }
        if !self.destinations.contains_key(&self.clipper.default_destination) {
            return Err(ClipperError::Config(format!(
                "default_destination '{}' is not defined",
                self.clipper.default_destination
            )));
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipperConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_destination_name")]
    pub default_destination: String,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_destination: default_destination_name(),
        }
    }
}

/// Length limits of one destination (a chat network, a channel, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    #[serde(default)]
    pub mode: FragmentMode,
    /// Byte limit per line; `0` keeps lines whole.
    #[serde(default)]
    pub max_line_length: usize,
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    #[serde(default = "default_max_parts")]
    pub max_parts: usize,
    /// Marker appended to clipped fragments. Empty = ` <clipped message>`.
    #[serde(default)]
    pub clipping_message: String,
    #[serde(default)]
    pub collapse_newlines: bool,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            mode: FragmentMode::default(),
            max_line_length: 0,
            max_message_length: default_max_message_length(),
            max_parts: default_max_parts(),
            clipping_message: String::new(),
            collapse_newlines: false,
        }
    }
}

impl DestinationConfig {
    /// Limits with the marker resolved, not yet validated.
    pub fn resolve(&self) -> Limits {
        Limits {
            mode: self.mode,
            max_line_length: self.max_line_length,
            max_message_length: self.max_message_length,
            max_parts: self.max_parts,
            collapse_newlines: self.collapse_newlines,
            marker: Marker::resolve(&self.clipping_message),
        }
    }

    /// Resolve the marker and validate the limits for this destination.
    pub fn limits(&self) -> Result<Limits, ClipperError> {
        let limits = self.resolve();
        limits.validate()?;
        Ok(limits)
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, ClipperError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ClipperError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    info!(
        "Loaded {} destination(s) from {}",
        config.destinations.len(),
        path.display()
    );

    Ok(config)
}
