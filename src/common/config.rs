use super::types::{Cylinder, Direction};

/// Number of cylinders on the simulated disk (numbered 0..DISK_SIZE-1)
pub const DISK_SIZE: Cylinder = 200;

/// Lowest addressable cylinder
pub const MIN_CYLINDER: Cylinder = 0;

/// Highest addressable cylinder
pub const MAX_CYLINDER: Cylinder = DISK_SIZE - 1;

/// Sweep direction used by SCAN and LOOK when none is given
pub const DEFAULT_DIRECTION: Direction = Direction::Right;

/// Default number of page frames for the replacement simulator
pub const DEFAULT_FRAME_CAPACITY: usize = 3;
