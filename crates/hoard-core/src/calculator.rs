//! # Value Calculator
//!
//! Caches container totals behind a content fingerprint.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ValueCalculator::evaluate                            │
//! │                                                                         │
//! │  items ──► fingerprint(items)                                           │
//! │                 │                                                       │
//! │        same as last committed? ──yes──► return cached result            │
//! │                 │ no                                                    │
//! │                 ▼                                                       │
//! │          appraise(items, prices, options)                               │
//! │                 │                                                       │
//! │          Err ───┴──► propagate, nothing committed                       │
//! │          Ok  ──────► commit fingerprint + result together               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! The cache lives exactly as long as the calculator. There is no reset
//! method: build a new calculator to forget what was valued.

use tracing::{debug, trace};

use crate::error::CoreResult;
use crate::fingerprint::{fingerprint, ChangeDetector};
use crate::pricing::PriceLookup;
use crate::types::{StackedItem, ValuationOptions, ValuationResult};
use crate::valuation::appraise;

/// Container valuation with change detection.
///
/// Not synchronized: callers that poll from several threads must serialize
/// access themselves.
#[derive(Debug, Clone, Default)]
pub struct ValueCalculator {
    detector: ChangeDetector,
    result: ValuationResult,
    passes: u64,
}

impl ValueCalculator {
    /// Creates a calculator with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns up-to-date totals for `items`.
    ///
    /// Runs a full pricing pass only when the contents differ from the last
    /// successfully valued contents. An empty slice is a valid container and
    /// values to zero.
    ///
    /// `options` only take effect when a pass runs; they are not part of the
    /// cache key. Unchanged contents return the cached totals whatever
    /// options are passed, so build a new calculator when the options change.
    ///
    /// ## Example
    /// ```rust
    /// use hoard_core::pricing::PriceTable;
    /// use hoard_core::{StackedItem, ValuationOptions, ValueCalculator};
    ///
    /// let prices = PriceTable::new().with(4151, 120_001, 1_650_000);
    /// let mut calculator = ValueCalculator::new();
    ///
    /// let bank = [StackedItem::new(4151, 1), StackedItem::new(995, 500)];
    /// let first = calculator.evaluate(&bank, &prices, ValuationOptions::ALL).unwrap();
    /// assert_eq!(first.market_value.amount(), 1_650_500);
    ///
    /// // Same contents, different slot order: served from cache
    /// let reordered = [StackedItem::new(995, 500), StackedItem::new(4151, 1)];
    /// let second = calculator.evaluate(&reordered, &prices, ValuationOptions::ALL).unwrap();
    /// assert_eq!(first, second);
    /// assert_eq!(calculator.passes(), 1);
    /// ```
    pub fn evaluate<P>(
        &mut self,
        items: &[StackedItem],
        prices: &P,
        options: ValuationOptions,
    ) -> CoreResult<ValuationResult>
    where
        P: PriceLookup + ?Sized,
    {
        let fp = fingerprint(items);

        if self.detector.is_current(fp) {
            trace!(fingerprint = fp.value(), "Container unchanged, using cached value");
            return Ok(self.result);
        }

        debug!(
            slots = items.len(),
            fingerprint = fp.value(),
            "Calculating new container value"
        );

        let result = appraise(items, prices, options)?;

        self.detector.commit(fp);
        self.result = result;
        self.passes += 1;

        debug!(
            market = %result.market_value,
            alchemy = %result.alchemy_value,
            "Container value updated"
        );

        Ok(result)
    }

    /// Last committed totals; zero before the first successful evaluation.
    #[inline]
    pub fn result(&self) -> ValuationResult {
        self.result
    }

    /// Number of full pricing passes run so far.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
