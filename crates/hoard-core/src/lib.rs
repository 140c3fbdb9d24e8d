//! # hoard-core: Pure Valuation Logic for Hoard Value
//!
//! Computes the market and alchemy value of an item container, and skips the
//! work when the container has not changed since the last evaluation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hoard Value Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              hoard-live (adapter, polling driver)               │   │
//! │  │   ContainerSource ──► TabLayout ──► ValueTracker::poll          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &[StackedItem]                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hoard-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │fingerprint│  │   tabs    │  │ valuation │  │calculator │  │   │
//! │  │   │  change   │  │  range    │  │ per-slot  │  │  cached   │  │   │
//! │  │   │ detection │  │ selection │  │  pricing  │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │ PriceLookup            │   │
//! │  │   NO I/O • NO GLOBALS • NO LOCKING     ▼                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                          price service (external)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StackedItem, ValuationResult, TabLayout)
//! - [`coins`] - Saturating coin amounts and the alchemy conversion rate
//! - [`fingerprint`] - Order-independent content fingerprints
//! - [`tabs`] - Active-tab range extraction
//! - [`pricing`] - The price lookup boundary
//! - [`valuation`] - One full pricing pass
//! - [`calculator`] - Fingerprint-gated cached valuation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hoard_core::pricing::PriceTable;
//! use hoard_core::tabs::select_range;
//! use hoard_core::{StackedItem, TabLayout, ValuationOptions, ValueCalculator};
//!
//! let prices = PriceTable::new().with(314, 3, 4);
//! let bank = vec![
//!     StackedItem::new(995, 1_000),   // tab 1
//!     StackedItem::new(314, 50),      // tab 2
//!     StackedItem::new(13_204, 2),    // tab 2
//! ];
//!
//! let layout = TabLayout::new(vec![1, 2], 2);
//! let tab = select_range(&bank, &layout).unwrap();
//!
//! let mut calculator = ValueCalculator::new();
//! let value = calculator.evaluate(tab, &prices, ValuationOptions::ALL).unwrap();
//!
//! assert_eq!(value.market_value.amount(), 50 * 4 + 2_000);
//! assert_eq!(value.alchemy_value.amount(), 50 * 2 + 2_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod coins;
pub mod error;
pub mod fingerprint;
pub mod pricing;
pub mod tabs;
pub mod types;
pub mod valuation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::ValueCalculator;
pub use coins::Coins;
pub use error::{CoreError, CoreResult, PriceError, PriceResult};
pub use fingerprint::ContentFingerprint;
pub use pricing::PriceLookup;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of bank tabs a live container can report counts for.
pub const MAX_BANK_TABS: usize = 9;
