//! ossim - disk scheduling and page replacement simulation in Rust
//!
//! This crate simulates two classical operating-system resource-management
//! problems. Every simulation is a pure, synchronous function of its inputs:
//! nothing is shared between calls, so the engine can be driven from any number
//! of threads.
//!
//! # Architecture
//!
//! - **Disk** (`disk`): ordering pending I/O requests to minimize head movement
//!   - `parse_disk_input` / `validate_disk_input`: turn user text into a workload
//!   - `SchedulingPolicy`: FCFS, SSTF, SCAN, C-SCAN, LOOK and C-LOOK
//!   - `DiskStrategy`: closed set of strategies with their parameters
//!   - `total_seek_time` / `average_seek_time`: seek metrics
//!
//! - **Page** (`page`): choosing which resident page to evict
//!   - `ReplacementPolicy`: FIFO, LRU and Belady's optimal
//!   - `FrameSet`: capacity-bounded frame slots
//!   - `simulate`: replays a reference string and records every step
//!
//! - **Report** (`report`): JSON output of results
//!
//! # Example
//!
//! ```rust
//! use ossim::disk::{validate_disk_input, DiskStrategy};
//! use ossim::common::Direction;
//!
//! let input = validate_disk_input("98,183,37,122,14,124,65,67", "53")
//!     .into_input()
//!     .unwrap();
//!
//! let result = DiskStrategy::Scan(Direction::Right)
//!     .run(&input.requests, input.head_position)
//!     .unwrap();
//!
//! assert_eq!(result.seek_time, 331);
//! ```

pub mod common;
pub mod disk;
pub mod page;
pub mod report;

// Re-export commonly used types at the crate root
pub use common::{Cylinder, Direction, PageId, Result, SimError, DISK_SIZE};
