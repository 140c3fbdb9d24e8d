//! # Content Fingerprint
//!
//! Cheap change detection for container contents.
//!
//! ## How It Works
//! ```text
//! slots:   (995, 100) (4151, 1) (-1, 0) (4151, 2)
//!              │          │        │        │
//!              ▼          ▼        │        ▼
//! mapping: { 995 → 100, 4151 → 3 } │              positive stacks sum per id
//!              │          │        │
//!              ▼          ▼        ▼
//!          H(995,100) + H(4151,3) + H(-1,0)      wrapping add
//!                         │
//!                         ▼
//!                  ContentFingerprint
//! ```
//!
//! Addition commutes, so slot order never matters. Each entry is hashed on
//! its own, so changing any id or quantity moves the sum. A collision makes a
//! changed container look unchanged until its next change; that risk is
//! accepted.
//!
//! Only positive quantities merge per id. A slot with a zero or negative
//! quantity contributes its own entry, so it can never cancel out part of a
//! valued stack of the same id.
//!
//! Empty slots are NOT filtered: `(0, 0)` and `(-1, 0)` fingerprint
//! differently even though both value to nothing.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::types::{ItemId, StackedItem};

/// Order-independent summary of a container's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFingerprint(u64);

impl ContentFingerprint {
    /// Returns the raw fingerprint value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// Computes the fingerprint of a slot list.
///
/// ## Example
/// ```rust
/// use hoard_core::fingerprint::fingerprint;
/// use hoard_core::StackedItem;
///
/// let a = [StackedItem::new(995, 10), StackedItem::new(4151, 1)];
/// let b = [StackedItem::new(4151, 1), StackedItem::new(995, 10)];
/// assert_eq!(fingerprint(&a), fingerprint(&b));
///
/// let c = [StackedItem::new(995, 11), StackedItem::new(4151, 1)];
/// assert_ne!(fingerprint(&a), fingerprint(&c));
/// ```
pub fn fingerprint(items: &[StackedItem]) -> ContentFingerprint {
    let mut stacks: HashMap<ItemId, i64> = HashMap::with_capacity(items.len());
    let mut loose = 0u64;
    for item in items {
        if item.quantity > 0 {
            let entry = stacks.entry(item.id).or_insert(0);
            *entry = entry.saturating_add(item.quantity as i64);
        } else {
            loose = loose.wrapping_add(entry_hash(item.id, item.quantity as i64));
        }
    }

    let combined = stacks
        .iter()
        .map(|(id, quantity)| entry_hash(*id, *quantity))
        .fold(loose, u64::wrapping_add);

    ContentFingerprint(combined)
}

/// Hashes one mapping entry with fixed hasher keys, so equal entries hash
/// equal across calls.
fn entry_hash(id: ItemId, quantity: i64) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.get().hash(&mut hasher);
    quantity.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Change Detector
// =============================================================================

/// Remembers the last fingerprint that was valued.
///
/// Starts empty, so the very first container (even an empty one) always
/// counts as a change.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last: Option<ContentFingerprint>,
}

impl ChangeDetector {
    /// Creates a detector with no stored fingerprint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `fp` matches the stored fingerprint.
    #[inline]
    pub fn is_current(&self, fp: ContentFingerprint) -> bool {
        self.last == Some(fp)
    }

    /// Stores `fp` as the last valued fingerprint.
    #[inline]
    pub fn commit(&mut self, fp: ContentFingerprint) {
        self.last = Some(fp);
    }

    /// Compares `fp` against the stored fingerprint.
    ///
    /// Stores `fp` and returns true when they differ; returns false and
    /// stores nothing when they match.
    pub fn has_changed(&mut self, fp: ContentFingerprint) -> bool {
        if self.is_current(fp) {
            return false;
        }
        self.commit(fp);
        true
    }

    /// Fingerprints `items` and applies [`has_changed`](Self::has_changed).
    ///
    /// ## Example
    /// ```rust
    /// use hoard_core::fingerprint::ChangeDetector;
    /// use hoard_core::StackedItem;
    ///
    /// let mut detector = ChangeDetector::new();
    /// let bank = [StackedItem::new(995, 10), StackedItem::new(4151, 1)];
    /// assert!(detector.items_changed(&bank));
    /// assert!(!detector.items_changed(&[bank[1], bank[0]]));
    /// ```
    pub fn items_changed(&mut self, items: &[StackedItem]) -> bool {
        self.has_changed(fingerprint(items))
    }

    /// Returns the stored fingerprint, if any.
    pub fn last(&self) -> Option<ContentFingerprint> {
        self.last
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(pairs: &[(i32, i32)]) -> Vec<StackedItem> {
        pairs.iter().map(|&(id, qty)| StackedItem::new(id, qty)).collect()
    }

    #[test]
    fn test_empty_list_is_fingerprintable() {
        assert_eq!(fingerprint(&[]), fingerprint(&[]));
        assert_ne!(fingerprint(&[]), fingerprint(&items(&[(995, 1)])));
    }

    #[test]
    fn test_quantity_change_is_detected() {
        let before = fingerprint(&items(&[(995, 100), (4151, 1)]));
        let after = fingerprint(&items(&[(995, 101), (4151, 1)]));
        assert_ne!(before, after);
    }

    #[test]
    fn test_added_and_removed_items_are_detected() {
        let base = fingerprint(&items(&[(995, 100)]));
        let added = fingerprint(&items(&[(995, 100), (4151, 1)]));
        assert_ne!(base, added);
        let removed = fingerprint(&items(&[(4151, 1)]));
        assert_ne!(added, removed);
    }

    #[test]
    fn test_duplicate_ids_merge() {
        let split = fingerprint(&items(&[(4151, 1), (995, 5), (4151, 2)]));
        let merged = fingerprint(&items(&[(995, 5), (4151, 3)]));
        assert_eq!(split, merged);
    }

    #[test]
    fn test_non_positive_slots_do_not_merge() {
        let net = fingerprint(&items(&[(4151, 3)]));
        let with_negative = fingerprint(&items(&[(4151, 5), (4151, -2)]));
        assert_ne!(net, with_negative);

        let split = fingerprint(&items(&[(4151, -2), (4151, -3)]));
        let merged = fingerprint(&items(&[(4151, -5)]));
        assert_ne!(split, merged);

        // order still irrelevant
        let reordered = fingerprint(&items(&[(4151, -2), (4151, 5)]));
        assert_eq!(with_negative, reordered);
    }

    #[test]
    fn test_repeated_empty_slots_counted() {
        let one = fingerprint(&items(&[(995, 5), (-1, 0)]));
        let two = fingerprint(&items(&[(995, 5), (-1, 0), (-1, 0)]));
        assert_ne!(one, two);
    }

    #[test]
    fn test_items_changed_uses_slot_list() {
        let mut detector = ChangeDetector::new();
        let bank = items(&[(995, 100), (4151, 1)]);
        let mut reordered = bank.clone();
        reordered.reverse();

        assert!(detector.items_changed(&bank));
        assert!(!detector.items_changed(&reordered));
        assert_eq!(detector.last(), Some(fingerprint(&bank)));
        assert!(detector.items_changed(&items(&[(995, 100)])));
    }

    #[test]
    fn test_empty_slot_representations_differ() {
        let zero = fingerprint(&items(&[(995, 5), (0, 0)]));
        let minus_one = fingerprint(&items(&[(995, 5), (-1, 0)]));
        assert_ne!(zero, minus_one);
    }

    #[test]
    fn test_has_changed_stores_only_on_difference() {
        let mut detector = ChangeDetector::new();
        let a = fingerprint(&items(&[(995, 1)]));
        let b = fingerprint(&items(&[(995, 2)]));

        assert!(detector.has_changed(a));
        assert!(!detector.has_changed(a));
        assert_eq!(detector.last(), Some(a));

        assert!(detector.has_changed(b));
        assert_eq!(detector.last(), Some(b));
    }

    #[test]
    fn test_first_empty_container_counts_as_change() {
        let mut detector = ChangeDetector::new();
        assert!(detector.has_changed(fingerprint(&[])));
        assert!(!detector.has_changed(fingerprint(&[])));
    }

    proptest! {
        #[test]
        fn prop_order_independent(
            pairs in prop::collection::vec((-2i32..5_000, -5i32..100_000), 0..40),
            seed in any::<u64>(),
        ) {
            let unshuffled = items(&pairs);
            let mut shuffled = unshuffled.clone();
            // deterministic permutation from the seed
            let len = shuffled.len();
            if len > 1 {
                let mut state = seed;
                for i in (1..len).rev() {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    let j = (state >> 33) as usize % (i + 1);
                    shuffled.swap(i, j);
                }
            }
            prop_assert_eq!(fingerprint(&unshuffled), fingerprint(&shuffled));
        }

        #[test]
        fn prop_single_quantity_change_detected(
            ids in prop::collection::hash_set(1i32..30_000, 1..30),
            qty in 1i32..1_000_000,
            delta in 1i32..1_000,
        ) {
            let ids: Vec<i32> = ids.into_iter().collect();
            let before: Vec<StackedItem> = ids.iter().map(|&id| StackedItem::new(id, qty)).collect();
            let mut after = before.clone();
            after[0].quantity += delta;
            prop_assert_ne!(fingerprint(&before), fingerprint(&after));
        }
    }
}
