//! # Container Source
//!
//! Reads the live container and its tab counters.
//!
//! ## Well-Known Counters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key                  Meaning                                           │
//! │  ───────────────────  ──────────────────────────────────────────────    │
//! │  current_bank_tab     0 = all tabs, n = tab n (1-based)                 │
//! │  bank_tab_1_count     slots in tab 1                                    │
//! │  …                                                                      │
//! │  bank_tab_9_count     slots in tab 9                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items stored outside any numbered tab sit after the last tab, so they are
//! only visible with tab 0.

use hoard_core::{StackedItem, TabLayout, MAX_BANK_TABS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{LiveError, LiveResult};

// =============================================================================
// Tab Counters
// =============================================================================

/// Named integer counters describing the tab layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabVar {
    /// The tab currently shown.
    CurrentTab,

    /// Item count of tab `n`, `1..=MAX_BANK_TABS`.
    TabCount(u8),
}

impl TabVar {
    /// Stable key of the counter.
    pub fn key(&self) -> String {
        match self {
            TabVar::CurrentTab => "current_bank_tab".to_string(),
            TabVar::TabCount(n) => format!("bank_tab_{}_count", n),
        }
    }

    /// Count counters of every tab, in tab order.
    pub fn tab_counts() -> impl Iterator<Item = TabVar> {
        (1..=MAX_BANK_TABS as u8).map(TabVar::TabCount)
    }
}

impl fmt::Display for TabVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

// =============================================================================
// Source Trait
// =============================================================================

/// A live container plus its tab counters.
pub trait ContainerSource {
    /// All slots of the container, or `None` if it is not loaded.
    fn container_items(&self) -> Option<Vec<StackedItem>>;

    /// Current value of a counter; unknown counters read as 0.
    fn var(&self, var: TabVar) -> i32;
}

impl<T: ContainerSource + ?Sized> ContainerSource for &T {
    fn container_items(&self) -> Option<Vec<StackedItem>> {
        (**self).container_items()
    }

    fn var(&self, var: TabVar) -> i32 {
        (**self).var(var)
    }
}

/// Reads the layout needed to slice the active tab.
///
/// Only the counts of the tabs up to the active one are read, since later
/// tabs never affect the range.
///
/// ## Errors
/// - `InvalidCounter` if the active tab or a needed count is negative
pub fn read_tab_layout<S: ContainerSource + ?Sized>(source: &S) -> LiveResult<TabLayout> {
    let current = read_counter(source, TabVar::CurrentTab)?;

    let counts = TabVar::tab_counts()
        .take(current as usize)
        .map(|var| read_counter(source, var))
        .collect::<LiveResult<Vec<u32>>>()?;

    Ok(TabLayout::new(counts, current))
}

fn read_counter<S: ContainerSource + ?Sized>(source: &S, var: TabVar) -> LiveResult<u32> {
    let value = source.var(var);
    u32::try_from(value).map_err(|_| LiveError::InvalidCounter { var, value })
}

// =============================================================================
// Static Source
// =============================================================================

/// A frozen container snapshot.
///
/// ## JSON Format
/// ```json
/// {
///   "items": [ { "id": 995, "quantity": 1000 }, { "id": 4151, "quantity": 1 } ],
///   "vars":  { "current_bank_tab": 1, "bank_tab_1_count": 2 }
/// }
/// ```
///
/// A missing or null `items` means the container is not loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticSource {
    /// Container slots.
    #[serde(default)]
    pub items: Option<Vec<StackedItem>>,

    /// Counter values by key.
    #[serde(default)]
    pub vars: HashMap<String, i32>,
}

impl StaticSource {
    /// Creates a loaded container with no counters set.
    pub fn new(items: Vec<StackedItem>) -> Self {
        StaticSource {
            items: Some(items),
            vars: HashMap::new(),
        }
    }

    /// Creates a source whose container is not loaded.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Sets a counter.
    pub fn set_var(&mut self, var: TabVar, value: i32) {
        self.vars.insert(var.key(), value);
    }

    /// Sets the tab counts and the active tab in one go.
    pub fn with_tabs(mut self, counts: &[i32], current_tab: i32) -> Self {
        for (var, &count) in TabVar::tab_counts().zip(counts) {
            self.set_var(var, count);
        }
        self.set_var(TabVar::CurrentTab, current_tab);
        self
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> LiveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot from a JSON file.
    pub fn load(path: &Path) -> LiveResult<Self> {
        debug!(?path, "Loading container snapshot");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl ContainerSource for StaticSource {
    fn container_items(&self) -> Option<Vec<StackedItem>> {
        self.items.clone()
    }

    fn var(&self, var: TabVar) -> i32 {
        self.vars.get(&var.key()).copied().unwrap_or(0)
    }
}
