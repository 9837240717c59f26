use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{Cylinder, Direction, Result, SeekDistance, SimError, DEFAULT_DIRECTION};

use super::{average_seek_time, total_seek_time};
use super::{CLook, CScan, Fcfs, Look, Scan, SchedulingPolicy, Sstf, VisitPlan};

/// Names of the disk scheduling strategies, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskStrategyKind {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl DiskStrategyKind {
    /// Every strategy, in presentation order
    pub const ALL: [DiskStrategyKind; 6] = [
        DiskStrategyKind::Fcfs,
        DiskStrategyKind::Sstf,
        DiskStrategyKind::Scan,
        DiskStrategyKind::CScan,
        DiskStrategyKind::Look,
        DiskStrategyKind::CLook,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiskStrategyKind::Fcfs => "FCFS",
            DiskStrategyKind::Sstf => "SSTF",
            DiskStrategyKind::Scan => "SCAN",
            DiskStrategyKind::CScan => "C-SCAN",
            DiskStrategyKind::Look => "LOOK",
            DiskStrategyKind::CLook => "C-LOOK",
        }
    }

    /// Whether the strategy reads a caller-chosen direction
    pub fn takes_direction(&self) -> bool {
        matches!(self, DiskStrategyKind::Scan | DiskStrategyKind::Look)
    }

    /// Whether the strategy always sweeps towards the last cylinder
    pub fn is_circular(&self) -> bool {
        matches!(self, DiskStrategyKind::CScan | DiskStrategyKind::CLook)
    }
}

impl fmt::Display for DiskStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiskStrategyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "FCFS" => Ok(DiskStrategyKind::Fcfs),
            "SSTF" => Ok(DiskStrategyKind::Sstf),
            "SCAN" => Ok(DiskStrategyKind::Scan),
            "CSCAN" => Ok(DiskStrategyKind::CScan),
            "LOOK" => Ok(DiskStrategyKind::Look),
            "CLOOK" => Ok(DiskStrategyKind::CLook),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

/// A fully parameterized disk scheduling strategy.
///
/// Only SCAN and LOOK carry a direction; the circular strategies always sweep
/// towards the last cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskStrategy {
    Fcfs,
    Sstf,
    Scan(Direction),
    CScan,
    Look(Direction),
    CLook,
}

impl DiskStrategy {
    /// Builds a strategy from its name and an optional direction.
    ///
    /// SCAN and LOOK fall back to the default direction. FCFS and SSTF ignore
    /// the direction. C-SCAN and C-LOOK only sweep one way and reject it.
    pub fn from_kind(kind: DiskStrategyKind, direction: Option<Direction>) -> Result<Self> {
        if direction.is_some() && kind.is_circular() {
            return Err(SimError::UnexpectedDirection(kind.name()));
        }
        if direction.is_some() && !kind.takes_direction() {
            debug!(strategy = %kind, "direction ignored");
        }
        Ok(Self::with_direction(kind, direction.unwrap_or(DEFAULT_DIRECTION)))
    }

    fn with_direction(kind: DiskStrategyKind, direction: Direction) -> Self {
        match kind {
            DiskStrategyKind::Fcfs => DiskStrategy::Fcfs,
            DiskStrategyKind::Sstf => DiskStrategy::Sstf,
            DiskStrategyKind::Scan => DiskStrategy::Scan(direction),
            DiskStrategyKind::CScan => DiskStrategy::CScan,
            DiskStrategyKind::Look => DiskStrategy::Look(direction),
            DiskStrategyKind::CLook => DiskStrategy::CLook,
        }
    }

    /// All six strategies, with `direction` applied to SCAN and LOOK
    pub fn all(direction: Direction) -> [DiskStrategy; 6] {
        DiskStrategyKind::ALL.map(|kind| Self::with_direction(kind, direction))
    }

    pub fn kind(&self) -> DiskStrategyKind {
        match self {
            DiskStrategy::Fcfs => DiskStrategyKind::Fcfs,
            DiskStrategy::Sstf => DiskStrategyKind::Sstf,
            DiskStrategy::Scan(_) => DiskStrategyKind::Scan,
            DiskStrategy::CScan => DiskStrategyKind::CScan,
            DiskStrategy::Look(_) => DiskStrategyKind::Look,
            DiskStrategy::CLook => DiskStrategyKind::CLook,
        }
    }

    /// Runs the strategy on a request set.
    ///
    /// Fails with [`SimError::NoRequests`] when `requests` is empty, since the
    /// average seek time is undefined.
    pub fn run(&self, requests: &[Cylinder], head: Cylinder) -> Result<DiskResult> {
        if requests.is_empty() {
            return Err(SimError::NoRequests);
        }

        let VisitPlan {
            sequence,
            unserviced_travel,
        } = self.plan(requests, head);

        let seek_time = total_seek_time(&sequence) - unserviced_travel;
        let result = DiskResult {
            name: self.name().to_string(),
            average_seek_time: average_seek_time(seek_time, requests.len()),
            seek_time,
            sequence,
            direction: self.direction(),
        };

        debug!(
            strategy = %result.name,
            requests = requests.len(),
            seek_time = result.seek_time,
            "disk schedule computed"
        );
        Ok(result)
    }
}

impl SchedulingPolicy for DiskStrategy {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn plan(&self, requests: &[Cylinder], head: Cylinder) -> VisitPlan {
        match *self {
            DiskStrategy::Fcfs => Fcfs.plan(requests, head),
            DiskStrategy::Sstf => Sstf.plan(requests, head),
            DiskStrategy::Scan(direction) => Scan { direction }.plan(requests, head),
            DiskStrategy::CScan => CScan.plan(requests, head),
            DiskStrategy::Look(direction) => Look { direction }.plan(requests, head),
            DiskStrategy::CLook => CLook.plan(requests, head),
        }
    }

    fn direction(&self) -> Option<Direction> {
        match *self {
            DiskStrategy::Scan(direction) | DiskStrategy::Look(direction) => Some(direction),
            _ => None,
        }
    }
}

impl fmt::Display for DiskStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "{} ({})", self.name(), direction),
            None => f.write_str(self.name()),
        }
    }
}

/// Result of one disk scheduling simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskResult {
    /// Strategy display name
    pub name: String,
    /// Visited cylinders, starting with the head position
    pub sequence: Vec<Cylinder>,
    /// Total serviced head movement
    pub seek_time: SeekDistance,
    /// `seek_time` divided by the number of requests
    pub average_seek_time: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub direction: Option<Direction>,
}

impl fmt::Display for DiskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .sequence
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        match self.direction {
            Some(direction) => writeln!(f, "{} ({})", self.name, direction)?,
            None => writeln!(f, "{}", self.name)?,
        }
        writeln!(f, "  Sequence:          {}", path)?;
        writeln!(f, "  Total seek time:   {}", self.seek_time)?;
        write!(f, "  Average seek time: {:.2}", self.average_seek_time)
    }
}

/// Runs one strategy by name.
///
/// `direction` steers SCAN and LOOK and is ignored by FCFS and SSTF. Passing
/// one to C-SCAN or C-LOOK is an error.
pub fn run_disk_strategy(
    kind: DiskStrategyKind,
    requests: &[Cylinder],
    head: Cylinder,
    direction: Option<Direction>,
) -> Result<DiskResult> {
    DiskStrategy::from_kind(kind, direction)?.run(requests, head)
}

/// Runs every strategy on the same workload and ranks them by total seek time.
/// Equal seek times keep presentation order.
pub fn compare_disk_strategies(
    requests: &[Cylinder],
    head: Cylinder,
    direction: Direction,
) -> Result<Vec<DiskResult>> {
    let mut results = DiskStrategy::all(direction)
        .iter()
        .map(|strategy| strategy.run(requests, head))
        .collect::<Result<Vec<_>>>()?;

    results.sort_by_key(|r| r.seek_time);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_kind_parse() {
        assert_eq!("fcfs".parse::<DiskStrategyKind>().unwrap(), DiskStrategyKind::Fcfs);
        assert_eq!("C-SCAN".parse::<DiskStrategyKind>().unwrap(), DiskStrategyKind::CScan);
        assert_eq!("clook".parse::<DiskStrategyKind>().unwrap(), DiskStrategyKind::CLook);
        assert!(matches!(
            "elevator".parse::<DiskStrategyKind>(),
            Err(SimError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_direction_rejected_for_circular() {
        let err = DiskStrategy::from_kind(DiskStrategyKind::CScan, Some(Direction::Left));
        assert!(matches!(err, Err(SimError::UnexpectedDirection("C-SCAN"))));

        let err = DiskStrategy::from_kind(DiskStrategyKind::CLook, Some(Direction::Right));
        assert!(matches!(err, Err(SimError::UnexpectedDirection("C-LOOK"))));
    }

    #[test]
    fn test_direction_ignored_by_fcfs_and_sstf() {
        for kind in [DiskStrategyKind::Fcfs, DiskStrategyKind::Sstf] {
            let strategy = DiskStrategy::from_kind(kind, Some(Direction::Left)).unwrap();
            assert_eq!(strategy.kind(), kind);
            assert_eq!(strategy.direction(), None);
        }
    }

    #[test]
    fn test_all_follows_kind_order() {
        let kinds: Vec<_> = DiskStrategy::all(Direction::Left)
            .iter()
            .map(|s| s.kind())
            .collect();
        assert_eq!(kinds, DiskStrategyKind::ALL.to_vec());
    }

    #[test]
    fn test_direction_defaults_to_right() {
        let strategy = DiskStrategy::from_kind(DiskStrategyKind::Scan, None).unwrap();
        assert_eq!(strategy, DiskStrategy::Scan(Direction::Right));
    }

    #[test]
    fn test_run_empty_requests() {
        assert!(matches!(DiskStrategy::Fcfs.run(&[], 53), Err(SimError::NoRequests)));
    }

    #[test]
    fn test_seek_times() {
        let expected = [
            (DiskStrategy::Fcfs, 640),
            (DiskStrategy::Sstf, 236),
            (DiskStrategy::Scan(Direction::Right), 331),
            (DiskStrategy::Scan(Direction::Left), 236),
            (DiskStrategy::CScan, 183),
            (DiskStrategy::Look(Direction::Right), 299),
            (DiskStrategy::Look(Direction::Left), 208),
            (DiskStrategy::CLook, 153),
        ];

        for (strategy, seek_time) in expected {
            let result = strategy.run(&REQUESTS, 53).unwrap();
            assert_eq!(result.seek_time, seek_time, "{}", strategy);
        }
    }

    #[test]
    fn test_result_direction_only_for_sweeps() {
        let scan = DiskStrategy::Scan(Direction::Left).run(&REQUESTS, 53).unwrap();
        assert_eq!(scan.direction, Some(Direction::Left));

        let cscan = DiskStrategy::CScan.run(&REQUESTS, 53).unwrap();
        assert_eq!(cscan.direction, None);
    }

    #[test]
    fn test_compare_sorted_by_seek_time() {
        let results = compare_disk_strategies(&REQUESTS, 53, Direction::Right).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C-LOOK", "C-SCAN", "SSTF", "LOOK", "SCAN", "FCFS"]);
    }
}
