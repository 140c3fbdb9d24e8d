//! # Valuation Pass
//!
//! One full pricing pass over a slot list. No caching happens here; see
//! [`crate::calculator::ValueCalculator`] for the gated version.
//!
//! ## Per-Slot Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  id <= 0 or qty <= 0   → skipped                                        │
//! │  COINS                 → market += qty,        alchemy += qty           │
//! │  PLATINUM_TOKEN        → market += qty × 1000, alchemy += qty × 1000    │
//! │  anything else         → alchemy += round(base × 0.6) × qty  (base > 0) │
//! │                          market  += market_price × qty                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The currency rows never touch the price lookup. A disabled model skips
//! its lookup entirely.

use tracing::trace;

use crate::coins::{Coins, ALCHEMY_RATE};
use crate::error::CoreResult;
use crate::pricing::PriceLookup;
use crate::types::{ItemId, StackedItem, ValuationOptions, ValuationResult};

/// Coins, valued at face value.
pub const COINS: ItemId = ItemId::new(995);

/// Platinum token, a fixed-rate stand-in for coins.
pub const PLATINUM_TOKEN: ItemId = ItemId::new(13204);

/// Coins per platinum token.
pub const PLATINUM_TOKEN_VALUE: i64 = 1_000;

/// Values a slot list under the enabled pricing models.
///
/// Totals live in locals until the whole pass succeeds; a failed lookup
/// returns the error and leaves nothing half-built.
///
/// ## Example
/// ```rust
/// use hoard_core::pricing::PriceTable;
/// use hoard_core::valuation::appraise;
/// use hoard_core::{StackedItem, ValuationOptions};
///
/// let prices = PriceTable::new().with(1_511, 7, 12);
/// let items = [StackedItem::new(995, 250), StackedItem::new(1_511, 5)];
///
/// let result = appraise(&items, &prices, ValuationOptions::ALL).unwrap();
/// assert_eq!(result.market_value.amount(), 250 + 12 * 5);
/// assert_eq!(result.alchemy_value.amount(), 250 + 4 * 5);
/// ```
pub fn appraise<P>(
    items: &[StackedItem],
    prices: &P,
    options: ValuationOptions,
) -> CoreResult<ValuationResult>
where
    P: PriceLookup + ?Sized,
{
    let mut market = Coins::ZERO;
    let mut alchemy = Coins::ZERO;

    for item in items.iter().filter(|item| item.is_valued()) {
        let quantity = item.quantity as i64;

        match item.id {
            COINS => {
                market += Coins::new(quantity);
                alchemy += Coins::new(quantity);
            }
            PLATINUM_TOKEN => {
                let value = Coins::new(PLATINUM_TOKEN_VALUE).multiply_quantity(quantity);
                market += value;
                alchemy += value;
            }
            id => {
                if options.alchemy {
                    let base = prices.base_price(id)?;
                    if base.is_positive() {
                        alchemy += ALCHEMY_RATE.apply(base).multiply_quantity(quantity);
                    }
                }

                if options.market {
                    market += prices.market_price(id)?.multiply_quantity(quantity);
                }
            }
        }
    }

    trace!(
        slots = items.len(),
        market = market.amount(),
        alchemy = alchemy.amount(),
        "Appraised container"
    );

    Ok(ValuationResult::new(market, alchemy))
}

// =============================================================================
// Unit Tests
// =============================================================================
