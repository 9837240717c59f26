use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::{PageId, Result, SimError, StepOutcome};

use super::{FifoReplacer, FrameSet, LruReplacer, OptimalReplacer};

/// A page replacement policy: picks the frame slot to overwrite when a
/// referenced page is missing and every slot is taken.
pub trait ReplacementPolicy {
    /// Display name of the policy
    fn name(&self) -> &'static str;

    /// Called for every reference, hit or miss, after the frame set is updated.
    fn record_access(&mut self, _page: PageId, _step: usize) {}

    /// Chooses the slot to evict at `step`. `frames` is full and does not hold
    /// `references[step]`.
    fn victim(&mut self, frames: &FrameSet, step: usize, references: &[PageId]) -> usize;

    /// Called after `page` has been evicted.
    fn remove(&mut self, _page: PageId) {}
}

/// Result of one page replacement simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Frame contents after each reference, in slot order
    pub history: Vec<Vec<PageId>>,
    /// Number of references that missed
    pub faults: usize,
    /// Hit or miss for each reference
    pub outcomes: Vec<StepOutcome>,
}

impl PageResult {
    pub fn hits(&self) -> usize {
        self.outcomes.len() - self.faults
    }

    /// Fraction of references served from a resident frame
    pub fn hit_ratio(&self) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            self.hits() as f64 / self.outcomes.len() as f64
        }
    }
}

/// Replays `references` against a frame set of `capacity` slots.
///
/// An empty reference string gives an empty result. With no frames at all
/// every reference misses and nothing becomes resident.
pub fn simulate<P: ReplacementPolicy + ?Sized>(
    policy: &mut P,
    references: &[PageId],
    capacity: usize,
) -> PageResult {
    let mut frames = FrameSet::new(capacity);
    let mut history = Vec::with_capacity(references.len());
    let mut outcomes = Vec::with_capacity(references.len());
    let mut faults = 0;

    for (step, &page) in references.iter().enumerate() {
        let outcome = if frames.contains(page) {
            StepOutcome::Hit
        } else {
            if !frames.is_full() {
                frames.push(page);
            } else if frames.capacity() > 0 {
                let slot = policy.victim(&frames, step, references);
                let evicted = frames.replace(slot, page);
                policy.remove(evicted);
                trace!(policy = policy.name(), step, slot, %evicted, %page, "evicted page");
            }
            faults += 1;
            StepOutcome::Miss
        };

        policy.record_access(page, step);
        history.push(frames.snapshot());
        outcomes.push(outcome);
    }

    PageResult {
        history,
        faults,
        outcomes,
    }
}

/// The page replacement strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageStrategy {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    Optimal,
}

impl PageStrategy {
    /// Every strategy, in presentation order
    pub const ALL: [PageStrategy; 3] = [
        PageStrategy::Fifo,
        PageStrategy::Lru,
        PageStrategy::Optimal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PageStrategy::Fifo => "FIFO",
            PageStrategy::Lru => "LRU",
            PageStrategy::Optimal => "Optimal",
        }
    }

    /// Runs the strategy on a reference string.
    pub fn run(&self, references: &[PageId], capacity: usize) -> Result<PageResult> {
        if references.is_empty() {
            return Err(SimError::NoReferences);
        }
        if capacity == 0 {
            return Err(SimError::InvalidCapacity(capacity));
        }

        let result = match self {
            PageStrategy::Fifo => simulate(&mut FifoReplacer::new(), references, capacity),
            PageStrategy::Lru => simulate(&mut LruReplacer::new(), references, capacity),
            PageStrategy::Optimal => simulate(&mut OptimalReplacer, references, capacity),
        };

        debug!(
            strategy = self.name(),
            references = references.len(),
            capacity,
            faults = result.faults,
            "page replacement simulated"
        );
        Ok(result)
    }
}

impl fmt::Display for PageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageStrategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PageStrategy::Fifo),
            "lru" => Ok(PageStrategy::Lru),
            "optimal" | "opt" => Ok(PageStrategy::Optimal),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Runs one page replacement strategy.
///
/// Fails on an empty reference string or a zero capacity.
pub fn run_page_strategy(
    strategy: PageStrategy,
    references: &[PageId],
    capacity: usize,
) -> Result<PageResult> {
    strategy.run(references, capacity)
}

/// Runs every strategy on the same reference string and ranks them by fault
/// count. Equal counts keep presentation order.
pub fn compare_page_strategies(
    references: &[PageId],
    capacity: usize,
) -> Result<Vec<(PageStrategy, PageResult)>> {
    let mut results = PageStrategy::ALL
        .iter()
        .map(|&strategy| strategy.run(references, capacity).map(|result| (strategy, result)))
        .collect::<Result<Vec<_>>>()?;

    results.sort_by_key(|(_, result)| result.faults);
    Ok(results)
}
