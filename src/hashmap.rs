//! Separate-chaining hash map.
//!
//! Keys hash into a power-of-two bucket array; each bucket is a `Vec` of entries
//! scanned linearly. The table doubles once `len > 3/4 * buckets`.

use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

// Use 'fnv' for fast hashing of the small keys these exercises use
use fnv::FnvBuildHasher;

const INITIAL_BUCKETS: usize = 8;

/// A hash map built from buckets of `(K, V)` chains.
pub struct ChainedHashMap<K, V, S = FnvBuildHasher> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> ChainedHashMap<K, V, FnvBuildHasher>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a map that holds `capacity` entries before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        // Smallest power of two that keeps `capacity` under the 3/4 load factor.
        let wanted = (capacity * 4).div_ceil(3).max(INITIAL_BUCKETS);
        let count = wanted.next_power_of_two();
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, Vec::new);
        Self {
            buckets,
            len: 0,
            hasher,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = &self.buckets[self.bucket_of(key)];
        bucket
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    // --- Modification ---

    /// Inserts or overwrites the entry for `key`, returning the previous value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        if let Some((_, slot)) = self.buckets[index].iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.buckets[index].push((key, value));
        self.len += 1;
        if self.len * 4 > self.buckets.len() * 3 {
            self.grow();
        }
        None
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(position).1)
    }

    /// Removes all entries, keeping the bucket array.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    // --- Internals ---

    #[inline]
    fn bucket_of<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        // Bucket count is a power of two, so masking is a modulo.
        (self.hasher.hash_one(key) as usize) & (self.buckets.len() - 1)
    }

    #[inline(never)]
    fn grow(&mut self) {
        let count = self.buckets.len() * 2;
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, Vec::new);
        let old = std::mem::replace(&mut self.buckets, buckets);
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_of(&key);
            self.buckets[index].push((key, value));
        }
    }
}

impl<K, V: PartialEq, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Linear scan over every entry.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|v| v == value)
    }
}

// --- Trait Implementations ---

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V, FnvBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Debug for ChainedHashMap<K, V, S>
where
    K: Hash + Eq + Debug,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashMap<K, V, FnvBuildHasher> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

// --- Tests ---
