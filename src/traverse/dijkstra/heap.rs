//! `IndexedMinHeap` - a binary min-heap over arena slots with decrease-key.
//!
//! Entries are `(cost, slot)` pairs. A position table maps each slot to its
//! current index in the heap array so a slot's cost can be lowered and the
//! entry sifted up in place.
//!
//! Ordering is by cost (`f64::total_cmp`), then by slot index, so extraction
//! order among equal costs is deterministic.

use core::cmp::Ordering;

/// A heap entry: the slot and the cost it is keyed by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) cost: f64,
    pub(crate) slot: usize,
}

impl HeapEntry {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        match self.cost.total_cmp(&other.cost) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.slot < other.slot,
        }
    }
}

/// Binary min-heap keyed by cost with per-slot position tracking.
#[derive(Debug, Clone, Default)]
pub(crate) struct IndexedMinHeap {
    data: Vec<HeapEntry>,
    positions: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Builds a heap holding slot `i` with cost `costs[i]` for every `i`.
    pub(crate) fn from_costs(costs: impl ExactSizeIterator<Item = f64>) -> Self {
        let data: Vec<HeapEntry> = costs
            .enumerate()
            .map(|(slot, cost)| HeapEntry { cost, slot })
            .collect();
        let positions = (0..data.len()).map(Some).collect();
        let mut heap = Self { data, positions };
        for node in (0..heap.data.len() / 2).rev() {
            heap.sift_down(node);
        }
        heap
    }

    /// Returns the number of entries.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no entries remain.
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `slot` is still in the heap.
    pub(crate) fn contains(&self, slot: usize) -> bool {
        matches!(self.positions.get(slot), Some(Some(_)))
    }

    /// Returns the minimum entry without removing it.
    pub(crate) fn peek(&self) -> Option<&HeapEntry> {
        self.data.first()
    }

    /// Removes and returns the minimum entry.
    pub(crate) fn pop(&mut self) -> Option<HeapEntry> {
        if self.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.swap(0, last_idx);
        let entry = self.data.pop()?;
        self.positions[entry.slot] = None;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Lowers the cost of `slot` and restores heap order.
    ///
    /// Returns `false` (and changes nothing) if `slot` is not in the heap or
    /// `cost` is not lower than its current cost.
    pub(crate) fn decrease_key(&mut self, slot: usize, cost: f64) -> bool {
        let Some(Some(idx)) = self.positions.get(slot).copied() else {
            return false;
        };
        if cost.total_cmp(&self.data[idx].cost) != Ordering::Less {
            return false;
        }
        self.data[idx].cost = cost;
        self.sift_up(idx);
        true
    }

    /// Slots still in the heap, in heap-array order.
    pub(crate) fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().map(|e| e.slot)
    }

    /// Entries still in the heap, in heap-array order.
    #[inline]
    pub(crate) fn entries(&self) -> &[HeapEntry] {
        &self.data
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.data[node].precedes(&self.data[parent]) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right].precedes(&self.data[left]) {
                smaller = right;
            }

            if self.data[smaller].precedes(&self.data[node]) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].slot] = Some(a);
        self.positions[self.data[b].slot] = Some(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut IndexedMinHeap) -> Vec<(f64, usize)> {
        let mut out = Vec::new();
        while let Some(e) = heap.pop() {
            out.push((e.cost, e.slot));
        }
        out
    }

    #[test]
    fn test_heapify_and_pop_order() {
        let mut heap = IndexedMinHeap::from_costs([5.0, 1.0, 10.0, 2.0, 8.0].into_iter());
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek().map(|e| e.slot), Some(1));
        assert_eq!(
            drain(&mut heap),
            vec![(1.0, 1), (2.0, 3), (5.0, 0), (8.0, 4), (10.0, 2)]
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn test_ties_break_by_slot() {
        let mut heap = IndexedMinHeap::from_costs([f64::INFINITY; 4].into_iter());
        let slots: Vec<_> = drain(&mut heap).into_iter().map(|(_, s)| s).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_decrease_key_repositions() {
        let inf = f64::INFINITY;
        let mut heap = IndexedMinHeap::from_costs([0.0, inf, inf, inf].into_iter());
        assert_eq!(heap.pop().map(|e| e.slot), Some(0));
        assert!(!heap.contains(0));

        assert!(heap.decrease_key(3, 4.0));
        assert!(heap.decrease_key(2, 1.0));
        assert!(heap.decrease_key(3, 2.0));
        // Not lower: ignored.
        assert!(!heap.decrease_key(3, 7.0));
        // Already popped: ignored.
        assert!(!heap.decrease_key(0, -1.0));

        assert_eq!(drain(&mut heap), vec![(1.0, 2), (2.0, 3), (inf, 1)]);
    }

    #[test]
    fn test_positions_stay_consistent() {
        let mut heap = IndexedMinHeap::from_costs((0..32).map(|i| f64::from(32 - i)));
        for slot in (0..32).step_by(3) {
            heap.decrease_key(slot, -f64::from(u32::try_from(slot).unwrap()));
        }
        for (idx, entry) in heap.data.iter().enumerate() {
            assert_eq!(heap.positions[entry.slot], Some(idx));
        }
        assert_eq!(heap.entries().len(), heap.len());
        let costs: Vec<f64> = drain(&mut heap).into_iter().map(|(c, _)| c).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }
}
