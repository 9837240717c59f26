use std::collections::HashMap;

use crate::common::PageId;

use super::{FrameSet, ReplacementPolicy};

/// Least Recently Used replacement.
///
/// Tracks the step at which each resident page was last referenced and evicts
/// the resident page with the oldest mark.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Last-referenced step per resident page
    last_seen: HashMap<PageId, usize>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for LruReplacer {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn record_access(&mut self, page: PageId, step: usize) {
        self.last_seen.insert(page, step);
    }

    fn victim(&mut self, frames: &FrameSet, _step: usize, _references: &[PageId]) -> usize {
        // Every resident page has been referenced at least once, so it has a mark.
        frames
            .pages()
            .iter()
            .enumerate()
            .min_by_key(|(_, page)| self.last_seen.get(*page).copied().unwrap_or(0))
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }

    fn remove(&mut self, page: PageId) {
        self.last_seen.remove(&page);
    }
}
