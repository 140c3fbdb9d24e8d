//! # Tab Range Extraction
//!
//! Narrows a full container down to the slots of the active tab.
//!
//! ## Range Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  current_tab = 0        → whole container, untouched                    │
//! │  current_tab = n (1..)  → start = counts[0] + … + counts[n-2]           │
//! │                           count = counts[n-1]                           │
//! │                           slice = items[start .. start + count]         │
//! │                                                                         │
//! │  n > counts.len()       → TabOutOfRange                                 │
//! │  start + count > len    → RangeOutOfBounds                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both failures are upstream data errors. Nothing here clamps; a bad layout
//! is reported instead of valuing the wrong slots.

use crate::error::{CoreError, CoreResult};
use crate::types::{StackedItem, TabLayout};

/// Returns the slots that belong to the active tab.
///
/// ## Example
/// ```rust
/// use hoard_core::tabs::select_range;
/// use hoard_core::{StackedItem, TabLayout};
///
/// let items: Vec<StackedItem> = (1..=10).map(|id| StackedItem::new(id, 1)).collect();
/// let layout = TabLayout::new(vec![3, 2, 5], 2);
///
/// let tab = select_range(&items, &layout).unwrap();
/// assert_eq!(tab, &items[3..5]);
/// ```
pub fn select_range<'a>(
    items: &'a [StackedItem],
    layout: &TabLayout,
) -> CoreResult<&'a [StackedItem]> {
    if layout.is_all_tabs() {
        return Ok(items);
    }

    let tab = layout.current_tab;
    let index = tab as usize - 1;
    let count = *layout
        .counts
        .get(index)
        .ok_or(CoreError::TabOutOfRange {
            tab,
            known: layout.counts.len(),
        })? as u64;

    // u64 sums of at most u32::MAX counts cannot overflow
    let start: u64 = layout.counts[..index].iter().map(|&c| c as u64).sum();
    let end = start + count;

    if end > items.len() as u64 {
        return Err(CoreError::RangeOutOfBounds {
            start,
            end,
            len: items.len(),
        });
    }

    Ok(&items[start as usize..end as usize])
}

// =============================================================================
// Unit Tests
// =============================================================================
