use std::cmp::Ordering;

/// Array-backed binary max-heap over `(priority, payload)` pairs.
///
/// Ordering considers the priority alone; the payload is opaque. Priorities
/// only need `PartialOrd`, which admits floats: an incomparable priority (NaN)
/// never compares greater, so it sinks rather than corrupting the heap.
pub struct MaxHeap<P, T> {
    entries: Vec<(P, T)>,
}

fn gt<P: PartialOrd>(a: &P, b: &P) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Greater))
}

impl<P: PartialOrd, T> MaxHeap<P, T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a pair, then sift it up while strictly greater than its parent.
    pub fn push(&mut self, priority: P, payload: T) {
        self.entries.push((priority, payload));
        let mut idx = self.entries.len() - 1;
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if gt(&self.entries[idx].0, &self.entries[parent].0) {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Remove and return the maximum-priority pair, or `None` if the heap is
    /// empty. Order among equal priorities is unspecified.
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop();
        self.sift_down(0);
        root
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let max_child = if right < len && gt(&self.entries[right].0, &self.entries[left].0) {
                right
            } else {
                left
            };
            // Ties keep the current position.
            if gt(&self.entries[max_child].0, &self.entries[idx].0) {
                self.entries.swap(idx, max_child);
                idx = max_child;
            } else {
                break;
            }
        }
    }
}

impl<P: PartialOrd, T> Default for MaxHeap<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn drain<P: PartialOrd, T>(h: &mut MaxHeap<P, T>) -> Vec<(P, T)> {
        let mut out = Vec::new();
        while let Some(pair) = h.pop() {
            out.push(pair);
        }
        out
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut h: MaxHeap<f64, &str> = MaxHeap::new();
        assert!(h.is_empty());
        assert_eq!(h.pop().map(|(_, p)| p), None);
        // A stored zero priority is a real element, not emptiness.
        h.push(0.0, "zero");
        assert_eq!(h.pop().map(|(_, p)| p), Some("zero"));
        assert!(h.pop().is_none());
    }

    #[test]
    fn pops_come_out_non_increasing() {
        let mut h = MaxHeap::new();
        for (pri, id) in [(3.0, "c"), (9.0, "a"), (1.0, "e"), (7.0, "b"), (2.0, "d")] {
            h.push(pri, id);
        }
        let order: Vec<&str> = drain(&mut h).into_iter().map(|(_, p)| p).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn random_interleaving_matches_oracle() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut h: MaxHeap<i64, usize> = MaxHeap::new();
        let mut oracle = std::collections::BinaryHeap::new();
        for i in 0..500 {
            if rng.gen_bool(0.6) || h.is_empty() {
                let pri = rng.gen_range(-1000..1000);
                h.push(pri, i);
                oracle.push(pri);
            } else {
                let (pri, _) = h.pop().unwrap();
                assert_eq!(pri, oracle.pop().unwrap());
            }
        }
        for (pri, _) in drain(&mut h) {
            assert_eq!(pri, oracle.pop().unwrap());
        }
        assert!(oracle.is_empty());
    }

    #[test]
    fn payload_multiset_survives_ties() {
        let mut h = MaxHeap::new();
        for id in 0..10 {
            h.push(5.0, id);
        }
        let mut ids: Vec<i32> = drain(&mut h).into_iter().map(|(_, id)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
    }
}
