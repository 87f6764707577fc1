//! Fixed-capacity hash map with chained buckets.
//!
//! # Architecture
//! - **Buckets**: boxed slice of chain heads, `array_size` long, allocated once.
//! - **Index**: primary hash, then [`mix`], then a mask of `array_size - 1`.
//! - **Chains**: singly linked owned nodes; new keys attach at the head.
//! - **Capacity**: a hard bound on distinct keys. The bucket array never grows;
//!   inserting a new key into a full map is refused.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;

use crate::bucket::{Bucket, Outcome};
use crate::error::Error;
use crate::hash::{DefaultHashBuilder, array_size_for, index_for, mix};

/// Collision summary returned by [`FixedCapacityHashMap::chain_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainStats {
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
}

/// A string-keyed hash map that holds at most `capacity` keys.
///
/// # Type Parameters
///
/// - `V`: Value type
/// - `S`: Primary hash builder (defaults to a fixed-seed foldhash)
///
/// # Examples
///
/// ```
/// use fixcap_map::FixedCapacityHashMap;
///
/// let mut map = FixedCapacityHashMap::new(2)?;
/// assert!(map.set("a", 1));
/// assert!(map.set("b", 2));
/// assert!(!map.set("c", 3)); // full
/// assert!(map.set("a", 10)); // updates are always allowed
///
/// assert_eq!(map.get("a"), Some(&10));
/// assert_eq!(map.delete("b"), Some(2));
/// assert_eq!(map.load(), 0.5);
/// # Ok::<(), fixcap_map::Error>(())
/// ```
pub struct FixedCapacityHashMap<V, S = DefaultHashBuilder> {
    buckets: Box<[Bucket<V>]>,
    mask: usize,
    capacity: usize,
    len: usize,
    hasher: S,
}

impl<V> FixedCapacityHashMap<V, DefaultHashBuilder> {
    /// Creates an empty map that holds at most `capacity` keys.
    ///
    /// Fails with [`Error::ZeroCapacity`] for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<V, S> FixedCapacityHashMap<V, S>
where
    S: BuildHasher,
{
    /// Creates an empty map that holds at most `capacity` keys, hashing keys
    /// with `hasher` before mixing.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let array_size = array_size_for(capacity).ok_or(Error::CapacityOverflow {
            requested: capacity,
        })?;

        let mut buckets = Vec::with_capacity(array_size);
        buckets.resize_with(array_size, Bucket::default);

        log::debug!("fixed-capacity map: capacity {capacity}, {array_size} buckets");

        Ok(Self {
            buckets: buckets.into_boxed_slice(),
            mask: array_size - 1,
            capacity,
            len: 0,
            hasher,
        })
    }

    #[inline(always)]
    fn locate(&self, key: &str) -> (u64, usize) {
        let hash = self.hasher.hash_one(key);
        (hash, index_for(mix(hash), self.mask))
    }

    /// Associates `value` with `key`.
    ///
    /// Returns `false` only when `key` is new and the map is full; the map is
    /// then left untouched and `value` is dropped. Updating an existing key
    /// always succeeds.
    pub fn set(&mut self, key: &str, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// When `key` is new and the map is full, nothing changes and `value` is
    /// handed back as `Err`.
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>, V> {
        let (hash, idx) = self.locate(key);
        let bucket = &mut self.buckets[idx];

        if self.len == self.capacity {
            // Only an update can succeed; never link a node we would have to
            // unlink again.
            return match bucket.find_mut(hash, key) {
                Some(entry) => Ok(Some(core::mem::replace(&mut entry.value, value))),
                None => {
                    log::trace!(
                        "rejecting new key of {} bytes: map is full ({} keys)",
                        key.len(),
                        self.capacity
                    );
                    Err(value)
                }
            };
        }

        match bucket.insert_or_update(hash, key, value) {
            Outcome::Inserted => {
                self.len += 1;
                Ok(None)
            }
            Outcome::Updated(old) => Ok(Some(old)),
        }
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let (hash, idx) = self.locate(key);
        self.buckets[idx].find(hash, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let (hash, idx) = self.locate(key);
        self.buckets[idx]
            .find_mut(hash, key)
            .map(|entry| &mut entry.value)
    }

    /// Checks if the key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value. An absent key changes nothing.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let (hash, idx) = self.locate(key);
        let value = self.buckets[idx].remove(hash, key)?;
        self.len -= 1;
        Some(value)
    }

    /// Get the underlying hasher itself.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

impl<V, S> FixedCapacityHashMap<V, S> {
    /// Number of distinct keys stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no new key can be inserted.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Maximum number of distinct keys.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many more new keys fit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// Length of the bucket array: the smallest power of two `>= capacity`.
    #[inline]
    pub fn array_size(&self) -> usize {
        self.buckets.len()
    }

    /// Load factor: `size() / capacity()`, always within `[0.0, 1.0]`.
    pub fn load(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }

    /// Removes every entry. The bucket array is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        log::debug!("cleared {} keys", self.len);
        self.len = 0;
    }

    /// Walks the bucket array and reports how keys are spread over it.
    ///
    /// This is O(array_size + len).
    pub fn chain_stats(&self) -> ChainStats {
        let mut stats = ChainStats::default();
        for bucket in self.buckets.iter().filter(|b| !b.is_empty()) {
            stats.occupied_buckets += 1;
            stats.longest_chain = stats.longest_chain.max(bucket.len());
        }
        stats
    }
}

impl<V, S> fmt::Debug for FixedCapacityHashMap<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedCapacityHashMap")
            .field("capacity", &self.capacity)
            .field("size", &self.len)
            .field("array_size", &self.buckets.len())
            .finish_non_exhaustive()
    }
}
