//! # Value Tracker
//!
//! The polling driver around [`ValueCalculator`].
//!
//! ## Poll Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ValueTracker::poll                              │
//! │                                                                         │
//! │  source.container_items()                                               │
//! │      │                                                                  │
//! │      ├── None ───────────────► return last result untouched             │
//! │      │                                                                  │
//! │      ▼ Some(items)                                                      │
//! │  read_tab_layout ──► select_range ──► &[StackedItem]                    │
//! │                                          │                              │
//! │  options.valuation_options()             │                              │
//! │      │                                   │                              │
//! │      ├── changed since last poll? ──► rebuild calculator                │
//! │      ▼                                   ▼                              │
//! │  calculator.evaluate(tab, prices, options)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hoard_core::tabs::select_range;
use hoard_core::{PriceLookup, ValuationOptions, ValuationResult, ValueCalculator};
use tracing::{debug, trace};

use crate::config::OptionsProvider;
use crate::error::LiveResult;
use crate::source::{read_tab_layout, ContainerSource};

/// Keeps the value of a live container current.
pub struct ValueTracker<S, P, C> {
    source: S,
    prices: P,
    options: C,
    calculator: ValueCalculator,
    last_options: Option<ValuationOptions>,
}

impl<S, P, C> ValueTracker<S, P, C>
where
    S: ContainerSource,
    P: PriceLookup,
    C: OptionsProvider,
{
    /// Creates a tracker with nothing valued yet.
    pub fn new(source: S, prices: P, options: C) -> Self {
        ValueTracker {
            source,
            prices,
            options,
            calculator: ValueCalculator::new(),
            last_options: None,
        }
    }

    /// Brings the totals up to date with the source.
    ///
    /// Returns the current totals. An unloaded container leaves them as they
    /// were; a loaded but empty one values to zero.
    ///
    /// ## Errors
    /// - `InvalidCounter` for negative tab counters
    /// - `Core` for a tab outside the container or a failed price lookup
    ///
    /// Nothing is committed on error, so the next poll retries.
    pub fn poll(&mut self) -> LiveResult<ValuationResult> {
        let Some(items) = self.source.container_items() else {
            trace!("Container not loaded, keeping last value");
            return Ok(self.calculator.result());
        };

        let layout = read_tab_layout(&self.source)?;
        let tab = select_range(&items, &layout)?;

        let options = self.options.valuation_options();
        if self.last_options.is_some_and(|last| last != options) {
            debug!(?options, "Valuation options changed, discarding cached value");
            self.calculator = ValueCalculator::new();
        }
        self.last_options = Some(options);

        Ok(self.calculator.evaluate(tab, &self.prices, options)?)
    }

    /// Last committed totals; zero before the first successful poll.
    pub fn result(&self) -> ValuationResult {
        self.calculator.result()
    }

    /// Full pricing passes run by the current calculator.
    pub fn passes(&self) -> u64 {
        self.calculator.passes()
    }

    /// The container source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the container source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Mutable access to the options provider.
    pub fn options_mut(&mut self) -> &mut C {
        &mut self.options
    }
}
