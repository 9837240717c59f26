use crate::common::PageId;

use super::{FrameSet, ReplacementPolicy};

/// FIFO replacement over a ring of frame slots.
///
/// A write pointer starts at slot 0 and advances by one (mod capacity) after
/// every eviction. Because slots fill in arrival order, the pointer always
/// rests on the slot whose page was loaded earliest.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Next slot to overwrite
    pointer: usize,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn victim(&mut self, frames: &FrameSet, _step: usize, _references: &[PageId]) -> usize {
        let slot = self.pointer % frames.capacity();
        self.pointer = (slot + 1) % frames.capacity();
        slot
    }
}
