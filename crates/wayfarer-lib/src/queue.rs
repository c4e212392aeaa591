//! Bin-merging min-priority queue used as the search frontier.
//!
//! Entries land in two fixed bins of capacity four that act as an insertion
//! buffer. Once both are full, every occupied bin is merged into the smallest
//! bin of the capacity chain (8, 16, 32, ...) able to hold them all, yielding
//! one sorted run. Merge cost is linear but merges into a bin of capacity `c`
//! happen at most once per `c / 2` inserts, so the amortized cost per insert
//! stays logarithmic and bins are never reallocated once created.
//!
//! Bins live in an arena indexed by position. Arena order is the capacity
//! chain; the non-empty chain is threaded through `next_non_empty` indices.

use tracing::trace;

/// Capacity of the two insertion bins.
const FIXED_BIN_CAPACITY: usize = 4;

const FIRST: usize = 0;
const SECOND: usize = 1;

#[derive(Debug)]
struct Bin<V> {
    keys: Box<[i32]>,
    values: Box<[Option<V>]>,
    /// Start of the occupied, ascending range `[low_pointer, capacity)`.
    low_pointer: usize,
    /// Cached `keys[low_pointer]` while the bin is non-empty.
    low_value: i32,
    next_non_empty: Option<usize>,
}

impl<V> Bin<V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: vec![0; capacity].into_boxed_slice(),
            values: (0..capacity).map(|_| None).collect(),
            low_pointer: capacity,
            low_value: 0,
            next_non_empty: None,
        }
    }

    fn capacity(&self) -> usize {
        self.keys.len()
    }

    fn len(&self) -> usize {
        self.capacity() - self.low_pointer
    }

    fn is_empty(&self) -> bool {
        self.low_pointer == self.capacity()
    }

    fn is_full(&self) -> bool {
        self.low_pointer == 0
    }

    /// Insertion-sort `key` into the occupied range, growing it downwards by one.
    /// The bin must not be full.
    fn add(&mut self, key: i32, value: V) {
        let capacity = self.capacity();
        let mut p = self.low_pointer;
        while p < capacity && key >= self.keys[p] {
            self.keys[p - 1] = self.keys[p];
            self.values.swap(p - 1, p);
            p += 1;
        }
        self.keys[p - 1] = key;
        self.values[p - 1] = Some(value);
        self.low_pointer -= 1;
        self.low_value = self.keys[self.low_pointer];
    }

    /// Remove the lowest entry. Returns the value and whether the bin is now empty.
    fn take_lowest(&mut self) -> (Option<V>, bool) {
        let value = self.values[self.low_pointer].take();
        self.low_pointer += 1;
        if self.is_empty() {
            return (value, true);
        }
        self.low_value = self.keys[self.low_pointer];
        (value, false)
    }
}

/// Min-priority queue keyed by `i32` costs.
///
/// Ties between equal keys are returned in no particular order.
#[derive(Debug)]
pub struct PriorityQueue<V> {
    bins: Vec<Bin<V>>,
    first_non_empty: Option<usize>,
    size: usize,
    peak_size: usize,
}

impl<V> PriorityQueue<V> {
    /// Create an empty queue holding only the two insertion bins.
    pub fn new() -> Self {
        Self {
            bins: vec![
                Bin::with_capacity(FIXED_BIN_CAPACITY),
                Bin::with_capacity(FIXED_BIN_CAPACITY),
            ],
            first_non_empty: None,
            size: 0,
            peak_size: 0,
        }
    }

    /// Number of entries currently held.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest `size` observed since creation or the last [`clear`](Self::clear).
    pub fn peak_size(&self) -> usize {
        self.peak_size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drop all entries and release the overflow bins.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Add a key/value pair.
    pub fn insert(&mut self, key: i32, value: V) {
        self.size += 1;
        if self.size > self.peak_size {
            self.peak_size = self.size;
        }

        if self.bins[FIRST].is_full() && self.bins[SECOND].is_full() {
            self.sort_up();
        }

        if !self.bins[FIRST].is_full() {
            self.bins[FIRST].add(key, value);
            if self.first_non_empty != Some(FIRST) {
                self.bins[FIRST].next_non_empty = self.first_non_empty;
                self.first_non_empty = Some(FIRST);
            }
        } else {
            // `FIRST` is full and therefore heads the non-empty chain.
            self.bins[SECOND].add(key, value);
            if self.bins[FIRST].next_non_empty != Some(SECOND) {
                self.bins[SECOND].next_non_empty = self.bins[FIRST].next_non_empty;
                self.bins[FIRST].next_non_empty = Some(SECOND);
            }
        }
    }

    /// Remove and return the value with the lowest key, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<V> {
        let index = self.min_bin()?;
        self.size -= 1;
        self.drop_lowest(index)
    }

    /// Lowest key currently held, without removing it.
    pub fn peek_key(&self) -> Option<i32> {
        self.min_bin().map(|index| self.bins[index].low_value)
    }

    /// Evenly strided sample of the current contents, at most `target_capacity`
    /// values, walking the non-empty bins in chain order. Values are ascending
    /// within each bin but not across bins. Intended for diagnostics only.
    pub fn sample(&self, target_capacity: usize) -> Vec<&V> {
        if target_capacity == 0 {
            return Vec::new();
        }
        let stride = self.size / target_capacity + 1;
        let mut sample = Vec::with_capacity(target_capacity.min(self.size));

        let mut offset = 0;
        let mut cursor = self.first_non_empty;
        while let Some(index) = cursor {
            let bin = &self.bins[index];
            offset += bin.low_pointer;
            while offset < bin.capacity() {
                if let Some(value) = &bin.values[offset] {
                    sample.push(value);
                }
                offset += stride;
            }
            offset -= bin.capacity();
            cursor = bin.next_non_empty;
        }

        sample.truncate(target_capacity);
        sample
    }

    fn min_bin(&self) -> Option<usize> {
        let mut min = self.first_non_empty?;
        let mut cursor = self.bins[min].next_non_empty;
        while let Some(index) = cursor {
            if self.bins[index].low_value < self.bins[min].low_value {
                min = index;
            }
            cursor = self.bins[index].next_non_empty;
        }
        Some(min)
    }

    fn drop_lowest(&mut self, index: usize) -> Option<V> {
        let (value, emptied) = self.bins[index].take_lowest();
        if emptied {
            self.unlink(index);
        }
        value
    }

    fn unlink(&mut self, index: usize) {
        let successor = self.bins[index].next_non_empty.take();
        if self.first_non_empty == Some(index) {
            self.first_non_empty = successor;
            return;
        }
        let mut cursor = self.first_non_empty;
        while let Some(current) = cursor {
            let next = self.bins[current].next_non_empty;
            if next == Some(index) {
                self.bins[current].next_non_empty = successor;
                return;
            }
            cursor = next;
        }
    }

    /// Arena index of the bin following `index` in the capacity chain,
    /// allocating it at twice the capacity when it does not exist yet.
    fn next_bin(&mut self, index: usize) -> usize {
        let next = index + 1;
        if next == self.bins.len() {
            let capacity = self.bins[index].capacity() << 1;
            self.bins.push(Bin::with_capacity(capacity));
        }
        next
    }

    /// Merge both full insertion bins and every overflow bin up to the first
    /// one large enough into that bin as a single sorted run.
    fn sort_up(&mut self) {
        let mut count = 2 * FIXED_BIN_CAPACITY;
        let mut target = SECOND;
        let mut last_non_empty = SECOND;
        loop {
            target = self.next_bin(target);
            let held = self.bins[target].len();
            if held > 0 {
                count += held;
                last_non_empty = target;
            }
            if count <= self.bins[target].capacity() {
                break;
            }
        }

        // Larger bins stay linked behind the merged one.
        let larger_non_empty = self.bins[last_non_empty].next_non_empty.take();

        let start = self.bins[target].capacity() - count;
        let mut write = start;
        while let Some(min) = self.min_bin() {
            let key = self.bins[min].low_value;
            // Pop before writing: the target bin may be read and written at
            // the same slot once it holds the only remaining entries.
            let value = self.drop_lowest(min);
            let bin = &mut self.bins[target];
            bin.keys[write] = key;
            bin.values[write] = value;
            write += 1;
        }

        let bin = &mut self.bins[target];
        bin.low_pointer = start;
        bin.low_value = bin.keys[start];
        bin.next_non_empty = larger_non_empty;
        self.first_non_empty = Some(target);

        trace!(
            target_capacity = self.bins[target].capacity(),
            merged = count,
            bins = self.bins.len(),
            "merged queue bins"
        );
    }
}

impl<V> Default for PriorityQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn drain_keys(queue: &mut PriorityQueue<i32>) -> Vec<i32> {
        std::iter::from_fn(|| queue.extract_min()).collect()
    }

    #[test]
    fn empty_queue_returns_none() {
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.extract_min(), None);
        assert_eq!(queue.peek_key(), None);
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn insertion_bins_stay_sorted() {
        let mut queue = PriorityQueue::new();
        for key in [5, 1, 7, 3, 3, 9, 0, 2] {
            queue.insert(key, key);
        }
        assert_eq!(queue.size(), 8);
        assert_eq!(queue.peek_key(), Some(0));
        assert_eq!(drain_keys(&mut queue), vec![0, 1, 2, 3, 3, 5, 7, 9]);
    }

    #[test]
    fn ninth_insert_triggers_merge_and_keeps_order() {
        let mut queue = PriorityQueue::new();
        for key in (0..9).rev() {
            queue.insert(key, key);
        }
        assert!(queue.bins.len() >= 3, "merge allocates the capacity-8 bin");
        assert_eq!(drain_keys(&mut queue), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn negative_keys_are_ordered() {
        let mut queue = PriorityQueue::new();
        for key in [-3, 10, -50, 0, i32::MIN, i32::MAX, 4, -4, 7, 1] {
            queue.insert(key, key);
        }
        let drained = drain_keys(&mut queue);
        let mut expected = drained.clone();
        expected.sort_unstable();
        assert_eq!(drained, expected);
        assert_eq!(drained.first(), Some(&i32::MIN));
    }

    #[test]
    fn matches_binary_heap_under_interleaved_load() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue = PriorityQueue::new();
        let mut reference = BinaryHeap::new();

        for _ in 0..20_000 {
            if rng.gen_bool(0.6) || reference.is_empty() {
                let key = rng.gen_range(-10_000..10_000);
                queue.insert(key, key);
                reference.push(Reverse(key));
            } else {
                let Reverse(expected) = reference.pop().expect("reference not empty");
                assert_eq!(queue.extract_min(), Some(expected));
            }
            assert_eq!(queue.size(), reference.len());
        }

        while let Some(Reverse(expected)) = reference.pop() {
            assert_eq!(queue.extract_min(), Some(expected));
        }
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    fn extraction_is_non_decreasing_for_monotone_search_pattern() {
        // Dijkstra-like usage: keys never drop below the last extracted key.
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = PriorityQueue::new();
        queue.insert(0, 0);
        let mut last = i32::MIN;
        let mut extracted = 0;
        while let Some(key) = queue.extract_min() {
            assert!(key >= last, "{key} extracted after {last}");
            last = key;
            extracted += 1;
            if extracted < 5_000 {
                for _ in 0..rng.gen_range(0..4) {
                    let next = key + rng.gen_range(0..100);
                    queue.insert(next, next);
                }
            }
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn peak_size_tracks_maximum() {
        let mut queue = PriorityQueue::new();
        let mut observed_max = 0;
        for round in 0..50 {
            for key in 0..(round % 7 + 3) {
                queue.insert(key * round, ());
                observed_max = observed_max.max(queue.size());
                assert!(queue.peak_size() >= queue.size());
            }
            for _ in 0..(round % 5) {
                queue.extract_min();
                assert!(queue.peak_size() >= queue.size());
            }
        }
        assert_eq!(queue.peak_size(), observed_max);
    }

    #[test]
    fn values_move_with_their_keys() {
        let mut queue = PriorityQueue::new();
        let names = ["delta", "alpha", "echo", "charlie", "bravo", "foxtrot"];
        for (key, name) in [4, 1, 5, 3, 2, 6].into_iter().zip(names) {
            queue.insert(key, name.to_string());
        }
        let order: Vec<String> = std::iter::from_fn(|| queue.extract_min()).collect();
        assert_eq!(
            order,
            vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]
        );
    }

    #[test]
    fn sample_is_bounded_by_capacity_and_size() {
        let mut queue = PriorityQueue::new();
        assert!(queue.sample(10).is_empty());

        for key in 0..3 {
            queue.insert(key, key);
        }
        assert!(queue.sample(10).len() <= 3);

        for key in 3..1_000 {
            queue.insert(key, key);
        }
        for capacity in [1, 7, 64, 999, 5_000] {
            let sample = queue.sample(capacity);
            assert!(sample.len() <= capacity);
            assert!(sample.len() <= queue.size());
            assert!(!sample.is_empty());
        }
        assert!(queue.sample(0).is_empty());
    }

    #[test]
    fn sample_only_returns_held_values() {
        let mut queue = PriorityQueue::new();
        for key in (0..16).rev() {
            queue.insert(key, key);
        }
        while queue.size() > 8 {
            queue.extract_min();
        }
        let sample: Vec<i32> = queue.sample(4).into_iter().copied().collect();
        assert!(!sample.is_empty());
        assert!(sample.len() <= 4);
        assert!(sample.iter().all(|key| (8..16).contains(key)));
    }

    #[test]
    fn sample_of_merged_run_is_ascending() {
        let mut queue = PriorityQueue::new();
        // The ninth insert merges the first eight into one sorted bin.
        for key in (0..9).rev() {
            queue.insert(key, key);
        }
        queue.extract_min();
        let sample: Vec<i32> = queue.sample(100).into_iter().copied().collect();
        assert_eq!(sample, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        // stride = 8 / 4 + 1
        let strided: Vec<i32> = queue.sample(4).into_iter().copied().collect();
        assert_eq!(strided, vec![1, 4, 7]);
    }

    #[test]
    fn sample_is_ascending_per_bin_only() {
        let mut queue = PriorityQueue::new();
        // The ninth insert merges 0..8 into one bin and lands in the first bin.
        for key in 0..9 {
            queue.insert(key, key);
        }
        let sample: Vec<i32> = queue.sample(100).into_iter().copied().collect();
        assert_eq!(sample, vec![8, 0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn clear_resets_state() {
        let mut queue = PriorityQueue::new();
        for key in 0..100 {
            queue.insert(key, key);
        }
        queue.clear();
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.peak_size(), 0);
        assert_eq!(queue.extract_min(), None);
        queue.insert(3, 3);
        assert_eq!(queue.extract_min(), Some(3));
    }
}
