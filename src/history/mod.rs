//! Session history of analyses
//!
//! Newest first, bounded, held in memory only. Nothing here survives the
//! process.

use std::collections::VecDeque;

use crate::content::AnalyzedContent;

pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded history: inserts at the front, evicts from the back.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<AnalyzedContent>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryBuffer {
    /// A capacity of zero is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prepend a record, dropping the oldest past capacity
    pub fn push(&mut self, record: AnalyzedContent) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &AnalyzedContent> {
        self.entries.iter()
    }

    /// Entry by position, 0 being the most recent
    pub fn get(&self, index: usize) -> Option<&AnalyzedContent> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&AnalyzedContent> {
        self.entries.front()
    }

    /// First entry whose id starts with `prefix`
    pub fn find(&self, prefix: &str) -> Option<&AnalyzedContent> {
        if prefix.is_empty() {
            return None;
        }
        self.entries.iter().find(|r| r.id().starts_with(prefix))
    }
}
