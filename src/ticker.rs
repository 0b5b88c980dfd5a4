// SPDX-License-Identifier: MPL-2.0
//! Rotating tech-stack line in the hero section.

use crate::config::{DEFAULT_TICKER_INTERVAL_MS, MAX_TICKER_INTERVAL_MS, MIN_TICKER_INTERVAL_MS};
use crate::page::Document;
use std::time::Duration;

/// Class of the elements that show the current ticker item.
pub const TICKER_CLASS: &str = "changing-tech";

/// Delay between two ticker items, clamped to a sane range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerInterval(u64);

impl TickerInterval {
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICKER_INTERVAL_MS, MAX_TICKER_INTERVAL_MS))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickerInterval {
    fn default() -> Self {
        Self(DEFAULT_TICKER_INTERVAL_MS)
    }
}

/// Cycles through a list of names, wrapping at the end.
#[derive(Debug, Clone)]
pub struct TechTicker {
    items: Vec<String>,
    index: usize,
    interval: TickerInterval,
}

impl TechTicker {
    pub fn new(items: Vec<String>, interval: TickerInterval) -> Self {
        Self {
            items,
            index: 0,
            interval,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.items.get(self.index).map(String::as_str)
    }

    /// Moves to the next item and returns it. `None` for an empty list.
    pub fn advance(&mut self) -> Option<&str> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn interval(&self) -> TickerInterval {
        self.interval
    }

    /// Writes the current item into every ticker element. Returns how many
    /// elements were written.
    pub fn seed(&self, document: &mut Document) -> usize {
        let Some(current) = self.current() else {
            return 0;
        };
        let mut written = 0;
        document.walk_mut(&mut |element| {
            if element.has_class(TICKER_CLASS) {
                element.set_text(current);
                written += 1;
            }
        });
        written
    }
}
