//! # hoard-live: Live Container Adapter
//!
//! Connects a live item container to the pure calculator in `hoard-core`.
//!
//! ## Modules
//!
//! - [`source`] - Container source trait, tab counters, JSON snapshots
//! - [`config`] - Pricing model flags from TOML and environment
//! - [`tracker`] - The polling `ValueTracker`
//! - [`error`] - Adapter error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hoard_core::pricing::PriceTable;
//! use hoard_core::StackedItem;
//! use hoard_live::{StaticSource, ValueConfig, ValueTracker};
//!
//! let source = StaticSource::new(vec![
//!     StackedItem::new(995, 10_000),
//!     StackedItem::new(314, 100),
//! ])
//! .with_tabs(&[1, 1], 2);
//!
//! let prices = PriceTable::new().with(314, 3, 4);
//! let mut tracker = ValueTracker::new(source, prices, ValueConfig::default());
//!
//! let value = tracker.poll().unwrap();
//! assert_eq!(value.market_value.amount(), 400);
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod tracker;

pub use config::{OptionsProvider, ValueConfig};
pub use error::{LiveError, LiveResult};
pub use source::{read_tab_layout, ContainerSource, StaticSource, TabVar};
pub use tracker::ValueTracker;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hoard_core=trace` - Show cache hits too
/// - Default: INFO, with DEBUG for the hoard crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hoard_core=debug,hoard_live=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
