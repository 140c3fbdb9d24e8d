//! # Domain Types
//!
//! Core domain types used throughout Hoard Value.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StackedItem    │   │ ValuationResult │   │   TabLayout     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  market_value   │   │  counts [u32]   │       │
//! │  │  quantity (i32) │   │  alchemy_value  │   │  current_tab    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │ValuationOptions │   Flags read once per evaluation                  │
//! │  │  market         │                                                    │
//! │  │  alchemy        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::coins::Coins;

// =============================================================================
// Item Identity
// =============================================================================

/// Identifier of an item definition.
///
/// Values `<= 0` mark an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(i32);

impl ItemId {
    /// Creates an item identifier.
    #[inline]
    pub const fn new(id: i32) -> Self {
        ItemId(id)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns true if this identifier names an actual item.
    #[inline]
    pub const fn is_item(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId(id)
    }
}

// =============================================================================
// Stacked Item
// =============================================================================

/// The contents of one container slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StackedItem {
    /// Item in the slot.
    pub id: ItemId,

    /// Stack size.
    pub quantity: i32,
}

impl StackedItem {
    /// Creates a slot from a raw identifier and quantity.
    #[inline]
    pub const fn new(id: i32, quantity: i32) -> Self {
        StackedItem {
            id: ItemId::new(id),
            quantity,
        }
    }

    /// An empty slot as reported by most containers.
    #[inline]
    pub const fn empty() -> Self {
        StackedItem::new(-1, 0)
    }

    /// Returns true if the slot holds something worth valuing.
    ///
    /// Quantities `<= 0` never contribute, whatever the identifier.
    #[inline]
    pub const fn is_valued(&self) -> bool {
        self.id.is_item() && self.quantity > 0
    }
}

// =============================================================================
// Valuation Result
// =============================================================================

/// Totals of one valuation pass.
///
/// Always built whole; a result is never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValuationResult {
    /// Sum of live market prices.
    pub market_value: Coins,

    /// Sum of alchemy prices.
    pub alchemy_value: Coins,
}

impl ValuationResult {
    /// Creates a result from both totals.
    #[inline]
    pub const fn new(market_value: Coins, alchemy_value: Coins) -> Self {
        ValuationResult {
            market_value,
            alchemy_value,
        }
    }

    /// The result reported before anything has been evaluated.
    #[inline]
    pub const fn zero() -> Self {
        ValuationResult::new(Coins::ZERO, Coins::ZERO)
    }
}

impl fmt::Display for ValuationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "market {} / alchemy {}",
            self.market_value, self.alchemy_value
        )
    }
}

// =============================================================================
// Valuation Options
// =============================================================================

/// Which pricing models an evaluation computes.
///
/// A disabled model issues no price lookups at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationOptions {
    /// Compute the market (exchange) value.
    pub market: bool,

    /// Compute the alchemy value.
    pub alchemy: bool,
}

impl ValuationOptions {
    /// Both models enabled.
    pub const ALL: ValuationOptions = ValuationOptions {
        market: true,
        alchemy: true,
    };

    /// Creates options from the two flags.
    #[inline]
    pub const fn new(market: bool, alchemy: bool) -> Self {
        ValuationOptions { market, alchemy }
    }
}

impl Default for ValuationOptions {
    fn default() -> Self {
        ValuationOptions::ALL
    }
}

// =============================================================================
// Tab Layout
// =============================================================================

/// Tab boundaries of a container plus the tab currently shown.
///
/// ## Layout
/// ```text
/// counts:  [ 3 ][ 2 ][    5    ]
/// items:   a b c d e f g h i j
///          └tab1┘└t2┘└──tab3──┘
///
/// current_tab = 0 → all items
/// current_tab = 2 → items[3..5] = d e
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabLayout {
    /// Item count of each tab, in tab order.
    pub counts: Vec<u32>,

    /// 1-based active tab; 0 selects every tab.
    pub current_tab: u32,
}

impl TabLayout {
    /// Creates a layout.
    pub fn new(counts: Vec<u32>, current_tab: u32) -> Self {
        TabLayout {
            counts,
            current_tab,
        }
    }

    /// A layout that selects the whole container.
    pub fn all_tabs() -> Self {
        TabLayout::default()
    }

    /// Returns true if no slicing applies.
    #[inline]
    pub fn is_all_tabs(&self) -> bool {
        self.current_tab == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
