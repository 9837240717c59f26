use tracing::trace;

use crate::common::{Cylinder, Direction, SeekDistance, MAX_CYLINDER, MIN_CYLINDER};

/// The order in which a policy services a request set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitPlan {
    /// Visited cylinders, starting with the initial head position
    pub sequence: Vec<Cylinder>,
    /// Travel included in `sequence` that is not counted as seek time
    /// (the return jump of the circular policies)
    pub unserviced_travel: SeekDistance,
}

impl VisitPlan {
    fn new(sequence: Vec<Cylinder>) -> Self {
        Self {
            sequence,
            unserviced_travel: 0,
        }
    }
}

/// A disk scheduling policy: turns a request set and a head position into a
/// visit order.
pub trait SchedulingPolicy {
    /// Display name of the policy (e.g. "C-SCAN")
    fn name(&self) -> &'static str;

    /// Computes the visit order. `requests` is left untouched.
    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan;

    /// The sweep direction, for policies that have one
    fn direction(&self) -> Option<Direction> {
        None
    }
}

/// Requests split around the head, both halves sorted ascending.
///
/// Requests sitting exactly on the head are served by the initial position and
/// appear in neither half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Requests below the head
    pub less: Vec<Cylinder>,
    /// Requests above the head
    pub greater: Vec<Cylinder>,
}

impl Partition {
    pub fn around(requests: &[Cylinder], head: Cylinder) -> Self {
        let mut sorted = requests.to_vec();
        sorted.sort_unstable();

        let less = sorted.iter().copied().filter(|&r| r < head).collect();
        let greater = sorted.into_iter().filter(|&r| r > head).collect();

        Self { less, greater }
    }
}

/// First-Come, First-Served: requests in arrival order
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let mut sequence = Vec::with_capacity(requests.len() + 1);
        sequence.push(head);
        sequence.extend_from_slice(requests);
        VisitPlan::new(sequence)
    }
}

/// Shortest Seek Time First: always move to the nearest pending request.
/// Ties go to the request that arrived first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let mut serviced = vec![false; requests.len()];
        let mut sequence = Vec::with_capacity(requests.len() + 1);
        sequence.push(head);

        let mut current = head;
        for _ in 0..requests.len() {
            // min_by_key keeps the first of equal minima, i.e. the lowest index
            let Some((index, &next)) = requests
                .iter()
                .enumerate()
                .filter(|(i, _)| !serviced[*i])
                .min_by_key(|(_, r)| r.abs_diff(current))
            else {
                break;
            };

            trace!(from = current, to = next, "sstf pick");
            serviced[index] = true;
            sequence.push(next);
            current = next;
        }

        VisitPlan::new(sequence)
    }
}

/// SCAN (elevator): sweep to the disk edge in `direction`, then reverse.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan {
    pub direction: Direction,
}

impl SchedulingPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let Partition { less, greater } = Partition::around(requests, head);
        let mut sequence = Vec::with_capacity(requests.len() + 2);
        sequence.push(head);

        match self.direction {
            Direction::Right => {
                sequence.extend(greater);
                sequence.push(MAX_CYLINDER);
                sequence.extend(less.into_iter().rev());
            }
            Direction::Left => {
                sequence.extend(less.into_iter().rev());
                sequence.push(MIN_CYLINDER);
                sequence.extend(greater);
            }
        }

        VisitPlan::new(sequence)
    }

    fn direction(&self) -> Option<Direction> {
        Some(self.direction)
    }
}

/// Circular SCAN: sweep right to the disk edge, return to cylinder 0 without
/// servicing, and sweep right again.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

impl SchedulingPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let Partition { less, greater } = Partition::around(requests, head);
        let mut sequence = Vec::with_capacity(requests.len() + 3);
        sequence.push(head);

        let mut unserviced_travel = 0;
        if !greater.is_empty() {
            sequence.extend(greater);
            sequence.push(MAX_CYLINDER);
            unserviced_travel = SeekDistance::from(MAX_CYLINDER - MIN_CYLINDER);
        }
        sequence.push(MIN_CYLINDER);
        sequence.extend(less);

        VisitPlan {
            sequence,
            unserviced_travel,
        }
    }
}

/// LOOK: like SCAN, but turns around at the last request instead of the edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Look {
    pub direction: Direction,
}

impl SchedulingPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let Partition { less, greater } = Partition::around(requests, head);
        let mut sequence = Vec::with_capacity(requests.len() + 1);
        sequence.push(head);

        match self.direction {
            Direction::Right => {
                sequence.extend(greater);
                sequence.extend(less.into_iter().rev());
            }
            Direction::Left => {
                sequence.extend(less.into_iter().rev());
                sequence.extend(greater);
            }
        }

        VisitPlan::new(sequence)
    }

    fn direction(&self) -> Option<Direction> {
        Some(self.direction)
    }
}

/// Circular LOOK: sweep right to the highest request, jump to the lowest
/// request without servicing, and sweep right again.
#[derive(Debug, Clone, Copy, Default)]
pub struct CLook;

impl SchedulingPolicy for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        let Partition { less, greater } = Partition::around(requests, head);

        let unserviced_travel = match (greater.last(), less.first()) {
            (Some(&highest), Some(&lowest)) => SeekDistance::from(highest - lowest),
            _ => 0,
        };

        let mut sequence = Vec::with_capacity(requests.len() + 1);
        sequence.push(head);
        sequence.extend(greater);
        sequence.extend(less);

        VisitPlan {
            sequence,
            unserviced_travel,
        }
    }
}
