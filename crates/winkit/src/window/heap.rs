//! Window storage
//!
//! A window's record is either carved out of the toolkit heap (and given back
//! when the window is destroyed) or backed by storage the caller owns, which
//! the toolkit holds for the window's lifetime and then hands back untouched.

/// A block handed out by a [`WindowHeap`].
///
/// Deliberately not `Clone`: a block is released exactly once, by value.
#[derive(Debug, PartialEq, Eq)]
pub struct HeapBlock {
    size: usize,
}

impl HeapBlock {
    /// Describe a freshly allocated block of `size` bytes
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Block size in bytes
    pub const fn size(&self) -> usize {
        self.size
    }
}

/// Caller-owned storage for one window.
///
/// Pass it to a constructor to create a window the toolkit will never free;
/// [`destroy`](crate::WindowSystem::destroy) returns it so it can be reused.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WindowStorage {
    uses: u32,
}

impl WindowStorage {
    /// Fresh, unused storage
    pub const fn new() -> Self {
        Self { uses: 0 }
    }

    /// How many windows this storage has backed so far
    pub const fn uses(&self) -> u32 {
        self.uses
    }

    pub(crate) fn claim(mut self) -> Self {
        self.uses += 1;
        self
    }
}

/// Allocation counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapStats {
    /// Successful allocations
    pub allocations: usize,
    /// Blocks given back
    pub releases: usize,
    /// Refused allocations
    pub failures: usize,
    /// Bytes currently handed out
    pub bytes_in_use: usize,
}

impl HeapStats {
    /// Blocks currently outstanding
    pub const fn live_blocks(&self) -> usize {
        self.allocations.saturating_sub(self.releases)
    }
}

/// Allocator for toolkit-owned window storage
pub trait WindowHeap {
    /// Obtain `size` bytes, or `None` when exhausted
    fn allocate(&mut self, size: usize) -> Option<HeapBlock>;

    /// Give a block back
    fn release(&mut self, block: HeapBlock);

    /// Allocation counters
    fn stats(&self) -> HeapStats;
}

/// A heap with an optional byte budget, standing in for the fixed-size heap
/// of a small target.
#[derive(Debug, Default)]
pub struct BudgetHeap {
    budget: Option<usize>,
    stats: HeapStats,
}

impl BudgetHeap {
    /// A heap that never runs out
    pub const fn unbounded() -> Self {
        Self {
            budget: None,
            stats: HeapStats {
                allocations: 0,
                releases: 0,
                failures: 0,
                bytes_in_use: 0,
            },
        }
    }

    /// A heap limited to `bytes`
    pub const fn with_budget(bytes: usize) -> Self {
        let mut heap = Self::unbounded();
        heap.budget = Some(bytes);
        heap
    }

    /// Bytes still available (`None` = unbounded)
    pub fn remaining(&self) -> Option<usize> {
        self.budget
            .map(|budget| budget.saturating_sub(self.stats.bytes_in_use))
    }
}

impl WindowHeap for BudgetHeap {
    fn allocate(&mut self, size: usize) -> Option<HeapBlock> {
        if self.remaining().is_some_and(|left| left < size) {
            self.stats.failures += 1;
            log::warn!(
                "Window heap exhausted: wanted {size} bytes, {} in use",
                self.stats.bytes_in_use
            );
            return None;
        }

        self.stats.allocations += 1;
        self.stats.bytes_in_use += size;
        Some(HeapBlock::new(size))
    }

    fn release(&mut self, block: HeapBlock) {
        self.stats.releases += 1;
        self.stats.bytes_in_use = self.stats.bytes_in_use.saturating_sub(block.size());
    }

    fn stats(&self) -> HeapStats {
        self.stats
    }
}

/// Where a live window's record came from
#[derive(Debug)]
pub(crate) enum Backing {
    /// Allocated by the toolkit; released on destroy
    Heap(HeapBlock),
    /// Lent by the caller; returned on destroy
    Caller(WindowStorage),
}
