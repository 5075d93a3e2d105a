// SPDX-License-Identifier: MPL-2.0
//! Bounded event history.
//!
//! A long gallery session can produce many page changes; only the newest
//! `limit` entries are kept and the rest are counted as evicted so the
//! report can say how much history is missing.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct EventRing<T> {
    entries: VecDeque<T>,
    limit: usize,
    evicted: u64,
}

impl<T> EventRing<T> {
    /// A ring keeping at most `limit` entries. A zero limit keeps one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(256)),
            limit,
            evicted: 0,
        }
    }

    pub fn record(&mut self, entry: T) {
        if self.entries.len() == self.limit && self.entries.pop_front().is_some() {
            self.evicted += 1;
        }
        self.entries.push_back(entry);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries pushed out since the ring was created.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}
