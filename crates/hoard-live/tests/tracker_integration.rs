//! End-to-end polling tests: source → tab slice → calculator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hoard_core::pricing::PriceTable;
use hoard_core::{
    Coins, CoreError, ItemId, PriceLookup, PriceResult, StackedItem, ValuationOptions,
    ValuationResult,
};
use hoard_live::{LiveError, StaticSource, TabVar, ValueConfig, ValueTracker};
use proptest::prelude::*;

/// Price lookup that records how often it is asked.
struct CountingPrices {
    table: PriceTable,
    base_calls: Cell<usize>,
    market_calls: Cell<usize>,
}

impl CountingPrices {
    fn new(table: PriceTable) -> Self {
        CountingPrices {
            table,
            base_calls: Cell::new(0),
            market_calls: Cell::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.base_calls.get() + self.market_calls.get()
    }
}

impl PriceLookup for CountingPrices {
    fn base_price(&self, item: ItemId) -> PriceResult<Coins> {
        self.base_calls.set(self.base_calls.get() + 1);
        self.table.base_price(item)
    }

    fn market_price(&self, item: ItemId) -> PriceResult<Coins> {
        self.market_calls.set(self.market_calls.get() + 1);
        self.table.market_price(item)
    }
}

fn price_table() -> PriceTable {
    PriceTable::new()
        .with(314, 3, 4)
        .with(1_511, 7, 12)
        .with(4151, 120_001, 1_650_000)
        .with(561, 180, 210)
}

/// Ten slots across three tabs: [3, 2, 5].
fn bank() -> Vec<StackedItem> {
    vec![
        // tab 1
        StackedItem::new(995, 1_000),
        StackedItem::new(13_204, 3),
        StackedItem::new(314, 100),
        // tab 2
        StackedItem::new(1_511, 5),
        StackedItem::new(4151, 1),
        // tab 3
        StackedItem::new(561, 250),
        StackedItem::new(-1, 0),
        StackedItem::new(0, 0),
        StackedItem::new(314, 10),
        StackedItem::new(-1, 0),
    ]
}

#[test]
fn test_tab_slicing_values_only_active_tab() {
    let source = StaticSource::new(bank()).with_tabs(&[3, 2, 5], 2);
    let mut tracker = ValueTracker::new(source, price_table(), ValueConfig::default());

    let value = tracker.poll().unwrap();
    assert_eq!(value.market_value.amount(), 12 * 5 + 1_650_000);
    assert_eq!(value.alchemy_value.amount(), 4 * 5 + 72_001);
}

#[test]
fn test_switching_tabs_recomputes() {
    let source = StaticSource::new(bank()).with_tabs(&[3, 2, 5], 1);
    let mut tracker = ValueTracker::new(source, price_table(), ValueConfig::default());

    let tab1 = tracker.poll().unwrap();
    assert_eq!(tab1.market_value.amount(), 1_000 + 3_000 + 400);
    assert_eq!(tab1.alchemy_value.amount(), 1_000 + 3_000 + 200);

    tracker.source_mut().set_var(TabVar::CurrentTab, 0);
    let all = tracker.poll().unwrap();
    assert!(all.market_value > tab1.market_value);
    assert_eq!(tracker.passes(), 2);
}

#[test]
fn test_polling_unchanged_bank_issues_no_lookups() {
    let prices = Rc::new(CountingPrices::new(price_table()));
    let source = StaticSource::new(bank());
    let mut tracker = ValueTracker::new(source, Rc::clone(&prices), ValueConfig::default());

    let first = tracker.poll().unwrap();
    let calls = prices.calls();
    assert!(calls > 0);

    for _ in 0..10 {
        assert_eq!(tracker.poll().unwrap(), first);
    }
    assert_eq!(prices.calls(), calls);

    // Rearranging slots is not a change
    tracker.source_mut().items.as_mut().unwrap().reverse();
    assert_eq!(tracker.poll().unwrap(), first);
    assert_eq!(prices.calls(), calls);
}

#[test]
fn test_currency_only_bank_needs_no_prices() {
    let prices = Rc::new(CountingPrices::new(PriceTable::new()));
    let source = StaticSource::new(vec![StackedItem::new(995, 1_000)]);
    let mut tracker = ValueTracker::new(source, Rc::clone(&prices), ValueConfig::default());

    let value = tracker.poll().unwrap();
    assert_eq!(value, ValuationResult::new(Coins::new(1_000), Coins::new(1_000)));
    assert_eq!(prices.calls(), 0);
}

#[test]
fn test_market_disabled_skips_market_lookups() {
    let prices = Rc::new(CountingPrices::new(price_table()));
    let source = StaticSource::new(bank());
    let options = || ValuationOptions::new(false, true);
    let mut tracker = ValueTracker::new(source, Rc::clone(&prices), options);

    let value = tracker.poll().unwrap();
    assert_eq!(prices.market_calls.get(), 0);
    assert_eq!(value.market_value.amount(), 4_000);
    assert!(value.alchemy_value.amount() > 4_000);
}

#[test]
fn test_options_read_every_poll() {
    let flags = Rc::new(RefCell::new(ValuationOptions::ALL));
    let provider = {
        let flags = Rc::clone(&flags);
        move || *flags.borrow()
    };
    let mut tracker = ValueTracker::new(StaticSource::new(bank()), price_table(), provider);

    let both = tracker.poll().unwrap();
    *flags.borrow_mut() = ValuationOptions::new(true, false);
    let market_only = tracker.poll().unwrap();

    assert_eq!(market_only.market_value, both.market_value);
    assert_eq!(market_only.alchemy_value.amount(), 4_000);
}

#[test]
fn test_bad_tab_fails_fast_and_keeps_last_value() {
    let source = StaticSource::new(bank()).with_tabs(&[3, 2, 5], 0);
    let mut tracker = ValueTracker::new(source, price_table(), ValueConfig::default());
    let valued = tracker.poll().unwrap();

    // layout claims more slots than the container has
    tracker.source_mut().set_var(TabVar::TabCount(3), 50);
    tracker.source_mut().set_var(TabVar::CurrentTab, 3);
    let err = tracker.poll().unwrap_err();
    assert!(matches!(
        err,
        LiveError::Core(CoreError::RangeOutOfBounds { .. })
    ));
    assert_eq!(tracker.result(), valued);

    // tab with no count
    tracker.source_mut().set_var(TabVar::CurrentTab, 10);
    assert!(matches!(
        tracker.poll().unwrap_err(),
        LiveError::Core(CoreError::TabOutOfRange { tab: 10, known: 9 })
    ));
}

#[test]
fn test_unknown_item_is_retried_next_poll() {
    let source = StaticSource::new(vec![StackedItem::new(30_000, 1)]);
    let mut tracker = ValueTracker::new(source, PriceTable::new(), ValueConfig::default());

    let err = tracker.poll().unwrap_err();
    assert!(err.is_transient());
    assert_eq!(tracker.result(), ValuationResult::zero());
    assert!(tracker.poll().is_err());
}

#[test]
fn test_snapshot_file_roundtrip() {
    let json = r#"{
        "items": [
            {"id": 995, "quantity": 500},
            {"id": 314, "quantity": 20},
            {"id": 4151, "quantity": 1}
        ],
        "vars": {"current_bank_tab": 1, "bank_tab_1_count": 2}
    }"#;
    let source = StaticSource::from_json(json).unwrap();
    let mut tracker = ValueTracker::new(source, price_table(), ValueConfig::default());

    let value = tracker.poll().unwrap();
    assert_eq!(value.market_value.amount(), 500 + 80);
    assert_eq!(value.alchemy_value.amount(), 500 + 40);
}

proptest! {
    #[test]
    fn prop_slot_order_never_triggers_recompute(rotation in 0usize..10) {
        let prices = Rc::new(CountingPrices::new(price_table()));
        let mut tracker = ValueTracker::new(StaticSource::new(bank()), Rc::clone(&prices), ValueConfig::default());
        let first = tracker.poll().unwrap();
        let calls = prices.calls();

        tracker.source_mut().items.as_mut().unwrap().rotate_left(rotation);
        prop_assert_eq!(tracker.poll().unwrap(), first);
        prop_assert_eq!(prices.calls(), calls);
    }
}
