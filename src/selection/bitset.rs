use bitvec::prelude::*;

/// Fixed-size bitset over catalog positions
///
/// Uses 0-based positions matching the catalog's display order.
/// Out-of-range positions are ignored on write and absent on read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionBitset {
    bits: BitVec,
}

impl PositionBitset {
    /// Create a bitset with no positions present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert a position
    pub fn insert(&mut self, position: usize) {
        if position < self.bits.len() {
            self.bits.set(position, true);
        }
    }

    /// Flip a position, returning whether it is present afterwards
    pub fn toggle(&mut self, position: usize) -> bool {
        if position >= self.bits.len() {
            return false;
        }
        let present = !self.contains(position);
        self.bits.set(position, present);
        present
    }

    /// Test position membership
    pub fn contains(&self, position: usize) -> bool {
        self.bits.get(position).as_deref() == Some(&true)
    }

    /// Set or clear every position at once
    pub fn fill(&mut self, present: bool) {
        self.bits.fill(present);
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every position is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}
