//! # Price Lookup
//!
//! The boundary between valuation and whatever knows item prices.
//!
//! ## Two Independent Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base_price(id)   → store price, input to the alchemy model            │
//! │  market_price(id) → live exchange price, input to the market model     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are pure functions of the identifier at call time. Implementations
//! may sit on a cache or a remote service; the valuation pass only calls
//! them on a content change, and never for a disabled model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::coins::Coins;
use crate::error::{PriceError, PriceResult};
use crate::types::ItemId;

/// Source of item prices.
pub trait PriceLookup {
    /// Store price of an item.
    fn base_price(&self, item: ItemId) -> PriceResult<Coins>;

    /// Live market price of an item.
    fn market_price(&self, item: ItemId) -> PriceResult<Coins>;
}

impl<T: PriceLookup + ?Sized> PriceLookup for &T {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).base_price(item)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).market_price(item)
    }
}

impl<T: PriceLookup + ?Sized> PriceLookup for Box<T> {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).base_price(item)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).market_price(item)
    }
}

impl<T: PriceLookup + ?Sized> PriceLookup for Rc<T> {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).base_price(item)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).market_price(item)
    }
}

impl<T: PriceLookup + ?Sized> PriceLookup for Arc<T> {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).base_price(item)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        (**self).market_price(item)
    }
}

// =============================================================================
// Price Table
// =============================================================================

/// Both prices of one item, as stored in a price table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPrices {
    /// Item identifier.
    pub id: ItemId,

    /// Store price.
    pub base: Coins,

    /// Market price.
    pub market: Coins,
}

/// A fixed in-memory price table.
///
/// ## JSON Format
/// ```json
/// [
///   { "id": 4151, "base": 120001, "market": 1650000 },
///   { "id": 314,  "base": 3,      "market": 4 }
/// ]
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<ItemId, ItemPrices>,
}

impl PriceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the prices of one item.
    pub fn insert(&mut self, id: impl Into<ItemId>, base: i64, market: i64) {
        let id = id.into();
        self.prices.insert(
            id,
            ItemPrices {
                id,
                base: Coins::new(base),
                market: Coins::new(market),
            },
        );
    }

    /// Builder form of [`PriceTable::insert`].
    pub fn with(mut self, id: impl Into<ItemId>, base: i64, market: i64) -> Self {
        self.insert(id, base, market);
        self
    }

    /// Parses a table from its JSON form.
    ///
    /// ## Example
    /// ```rust
    /// use hoard_core::pricing::{PriceLookup, PriceTable};
    /// use hoard_core::ItemId;
    ///
    /// let table = PriceTable::from_json(r#"[{"id": 314, "base": 3, "market": 4}]"#).unwrap();
    /// assert_eq!(table.market_price(ItemId::new(314)).unwrap().amount(), 4);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<ItemPrices> = serde_json::from_str(json)?;
        Ok(entries.into_iter().collect())
    }

    /// Number of priced items.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the table holds no prices.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn entry(&self, item: ItemId) -> PriceResult<&ItemPrices> {
        self.prices.get(&item).ok_or(PriceError::UnknownItem(item))
    }
}

impl FromIterator<ItemPrices> for PriceTable {
    fn from_iter<I: IntoIterator<Item = ItemPrices>>(iter: I) -> Self {
        PriceTable {
            prices: iter.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

impl PriceLookup for PriceTable {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        Ok(self.entry(item)?.base)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        Ok(self.entry(item)?.market)
    }
}
