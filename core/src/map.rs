use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

const DEFAULT_BUCKETS: usize = 100;

/// Chained hash map with a fixed bucket count.
///
/// Keys land in bucket `hash(key) % bucket_count` and collisions are resolved
/// by a linear scan within the bucket. The bucket count never changes for the
/// lifetime of the map, so lookups are O(average bucket length).
pub struct BucketMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K: Hash + Eq, V> BucketMap<K, V> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
            hasher: RandomState::new(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> BucketMap<K, V, S> {
    fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Insert a key-value pair, replacing the value in place if the key is
    /// already present. Returns the previous value for an existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        for entry in &mut self.buckets[idx] {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        self.buckets[idx].push((key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx].iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| *k == *key)
            .map(|(_, v)| v)
    }

    /// Remove the entry for `key`, returning its value. `None` means the key
    /// was not present and nothing changed.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let pos = self.buckets[idx].iter().position(|(k, _)| k == key)?;
        let (_, value) = self.buckets[idx].remove(pos);
        self.len -= 1;
        Some(value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate all entries, bucket by bucket. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|b| b.iter().map(|(k, v)| (k, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    #[cfg(test)]
    fn bucket_len_for(&self, key: &K) -> usize {
        self.buckets[self.bucket_index(key)].len()
    }
}

impl<K: Hash + Eq, V> Default for BucketMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
