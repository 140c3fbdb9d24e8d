//! # Value Configuration
//!
//! Which pricing models the tracker computes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HOARD_SHOW_MARKET=false                                            │
//! │     HOARD_SHOW_ALCHEMY=true                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/value/hoard.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.hoard.value/hoard.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     both models enabled                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [valuation]
//! show_market = true
//! show_alchemy = false
//! ```

use hoard_core::ValuationOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{LiveError, LiveResult};

/// Environment override for the market model.
pub const ENV_SHOW_MARKET: &str = "HOARD_SHOW_MARKET";

/// Environment override for the alchemy model.
pub const ENV_SHOW_ALCHEMY: &str = "HOARD_SHOW_ALCHEMY";

// =============================================================================
// Options Provider
// =============================================================================

/// Supplies the pricing flags for each poll.
///
/// The tracker asks once per poll and never caches the answer, so a provider
/// backed by a settings screen takes effect on the next poll.
pub trait OptionsProvider {
    /// Current flags.
    fn valuation_options(&self) -> ValuationOptions;
}

impl<F> OptionsProvider for F
where
    F: Fn() -> ValuationOptions,
{
    fn valuation_options(&self) -> ValuationOptions {
        self()
    }
}

// =============================================================================
// Valuation Settings
// =============================================================================

/// The `[valuation]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSettings {
    /// Compute the market (exchange) value.
    #[serde(default = "default_true")]
    pub show_market: bool,

    /// Compute the alchemy value.
    #[serde(default = "default_true")]
    pub show_alchemy: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValuationSettings {
    fn default() -> Self {
        ValuationSettings {
            show_market: true,
            show_alchemy: true,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueConfig {
    /// Pricing model flags.
    #[serde(default)]
    pub valuation: ValuationSettings,
}

impl ValueConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (hoard.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> LiveResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading value config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| LiveError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load value config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config from TOML text.
    pub fn from_toml(contents: &str) -> LiveResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> LiveResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| LiveError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Value config saved");
        Ok(())
    }

    /// Applies overrides from a key lookup (the environment, in `load`).
    ///
    /// ## Errors
    /// `InvalidConfig` when a variable is set but is not a boolean.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> LiveResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SHOW_MARKET) {
            self.valuation.show_market = parse_flag(ENV_SHOW_MARKET, &raw)?;
            debug!(show_market = self.valuation.show_market, "Overriding market flag from environment");
        }

        if let Some(raw) = lookup(ENV_SHOW_ALCHEMY) {
            self.valuation.show_alchemy = parse_flag(ENV_SHOW_ALCHEMY, &raw)?;
            debug!(show_alchemy = self.valuation.show_alchemy, "Overriding alchemy flag from environment");
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hoard", "value")
            .map(|dirs| dirs.config_dir().join("hoard.toml"))
    }
}

impl OptionsProvider for ValueConfig {
    fn valuation_options(&self) -> ValuationOptions {
        ValuationOptions::new(self.valuation.show_market, self.valuation.show_alchemy)
    }
}

fn parse_flag(key: &str, raw: &str) -> LiveResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(LiveError::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
