use crate::common::PageId;

/// Resident pages, one per frame slot.
///
/// Slots are filled left to right and then only ever overwritten in place, so a
/// page keeps its slot for as long as it stays resident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<PageId>,
    capacity: usize,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Places `page` in the next free slot. The set must not be full.
    pub fn push(&mut self, page: PageId) {
        debug_assert!(!self.is_full());
        self.slots.push(page);
    }

    /// Overwrites `slot` with `page`, returning the evicted page
    pub fn replace(&mut self, slot: usize, page: PageId) -> PageId {
        std::mem::replace(&mut self.slots[slot], page)
    }

    pub fn pages(&self) -> &[PageId] {
        &self.slots
    }

    /// Copy of the current slot contents
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }
}
