mod fifo;
mod frames;
mod input;
mod lru;
mod optimal;
mod replacer;

pub use fifo::*;
pub use frames::*;
pub use input::*;
pub use lru::*;
pub use optimal::*;
pub use replacer::*;
