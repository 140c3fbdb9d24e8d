//! # Error Types
//!
//! Domain-specific error types for hoard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hoard-core errors (this file)                                         │
//! │  ├── CoreError        - Tab bounds and valuation failures              │
//! │  └── PriceError       - Raised by PriceLookup implementations          │
//! │                                                                         │
//! │  hoard-live errors (separate crate)                                    │
//! │  └── LiveError        - Source counters, config loading                │
//! │                                                                         │
//! │  Flow: PriceError → CoreError → LiveError → driver                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed evaluation never commits anything, so every error here is
//! retryable on the next poll once the upstream data is fixed.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Valuation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The active tab has no known item count.
    ///
    /// ## When This Occurs
    /// - The source reports tab 5 but only 4 tab counts
    /// - Counter data is stale after tabs were collapsed
    #[error("Tab {tab} is out of range: only {known} tab counts are known")]
    TabOutOfRange { tab: u32, known: usize },

    /// The tab range runs past the end of the item list.
    #[error("Tab range {start}..{end} exceeds container of {len} slots")]
    RangeOutOfBounds { start: u64, end: u64, len: usize },

    /// A price lookup failed.
    #[error("Price lookup failed: {0}")]
    Price(#[from] PriceError),
}

// =============================================================================
// Price Error
// =============================================================================

/// Failures reported by a price lookup service.
#[derive(Debug, Error)]
pub enum PriceError {
    /// The lookup service has never heard of this item.
    #[error("Unknown item {0}")]
    UnknownItem(ItemId),

    /// The lookup service knows the item but cannot answer right now.
    #[error("Price for item {item} unavailable: {reason}")]
    Unavailable { item: ItemId, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type returned by price lookups.
pub type PriceResult<T> = Result<T, PriceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TabOutOfRange { tab: 5, known: 4 };
        assert_eq!(
            err.to_string(),
            "Tab 5 is out of range: only 4 tab counts are known"
        );

        let err = CoreError::RangeOutOfBounds {
            start: 8,
            end: 12,
            len: 10,
        };
        assert_eq!(err.to_string(), "Tab range 8..12 exceeds container of 10 slots");
    }

    #[test]
    fn test_price_error_converts_to_core_error() {
        let price_err = PriceError::UnknownItem(ItemId::new(4151));
        assert_eq!(price_err.to_string(), "Unknown item #4151");
        let core_err: CoreError = price_err.into();
        assert!(matches!(core_err, CoreError::Price(PriceError::UnknownItem(_))));
    }
}
