//! # Live Adapter Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Source         │  │  Configuration  │  │  Valuation              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidCounter │  │  InvalidConfig  │  │  Core (tab bounds,      │ │
//! │  │  Json           │  │  ConfigLoad...  │  │        price lookups)   │ │
//! │  │                 │  │  TomlParse      │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hoard_core::CoreError;
use thiserror::Error;

use crate::source::TabVar;

/// Result type alias for adapter operations.
pub type LiveResult<T> = Result<T, LiveError>;

/// Adapter error type.
#[derive(Debug, Error)]
pub enum LiveError {
    // =========================================================================
    // Source Errors
    // =========================================================================
    /// A tab counter holds a value no layout can have.
    #[error("Counter {var} has invalid value {value}")]
    InvalidCounter { var: TabVar, value: i32 },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load a config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save a config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // =========================================================================
    // Data Errors
    // =========================================================================
    /// JSON snapshot or price table could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Valuation Errors
    // =========================================================================
    /// Tab range or price lookup failure from the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LiveError {
    /// Returns true if polling again later may succeed without intervention.
    ///
    /// Price lookups and tab data come from live systems that settle on
    /// their own; configuration and file errors do not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LiveError::Core(_) | LiveError::InvalidCounter { .. }
        )
    }
}
