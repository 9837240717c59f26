use crate::common::PageId;

use super::{FrameSet, ReplacementPolicy};

/// Belady's optimal replacement.
///
/// Looks ahead in the reference string and evicts the page needed furthest in
/// the future. Pages that are never referenced again go first, lowest slot
/// winning; otherwise the lowest slot among the furthest next uses wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimalReplacer;

impl ReplacementPolicy for OptimalReplacer {
    fn name(&self) -> &'static str {
        "Optimal"
    }

    fn victim(&mut self, frames: &FrameSet, step: usize, references: &[PageId]) -> usize {
        let future = references.get(step + 1..).unwrap_or(&[]);

        let mut victim = 0;
        let mut furthest = 0;
        for (slot, page) in frames.pages().iter().enumerate() {
            match future.iter().position(|p| p == page) {
                None => return slot,
                Some(next_use) if slot == 0 || next_use > furthest => {
                    victim = slot;
                    furthest = next_use;
                }
                Some(_) => {}
            }
        }

        victim
    }
}
