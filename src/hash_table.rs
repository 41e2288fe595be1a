//! HashTable: separate-chaining map over an arena-backed bucket array.

use crate::chain::{Buckets, Entry, Iter, Probe, ValuesMut};
use crate::config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use crate::error::TableError;
use crate::growth::GrowthPolicy;
use crate::index::bucket_index;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// A hash table mapping unique keys to values.
///
/// Keys are placed by [`bucket_index`] over their hash; keys that share a
/// bucket form a chain in insertion order. Before every [`put`] the table
/// checks its load (`len / capacity`) and doubles the bucket array once the
/// load exceeds the configured load factor, relinking every entry into the
/// bucket its hash selects under the new capacity.
///
/// [`put`]: HashTable::put
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    hasher: S,
    buckets: Buckets<K, V>,
    growth: GrowthPolicy,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// Fails with [`TableError::ZeroCapacity`] when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::default().initial_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(config, Default::default())
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Number of key-value pairs stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.len() == 0
    }

    /// Number of bucket slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.growth.load_factor()
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Visits every entry; values have no index.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.buckets.values().any(|v| v == value)
    }

    /// Replaces the bucket array with one of `new_capacity` slots and
    /// rehashes every entry into it. Entries are kept; only their bucket
    /// placement changes. Any positive capacity is accepted, including one
    /// smaller than the current.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), TableError> {
        if new_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        #[cfg(feature = "logging")]
        log::trace!(
            "resizing hash table from {} to {} buckets ({} entries)",
            self.capacity(),
            new_capacity,
            self.len()
        );
        self.buckets.rehome(new_capacity);
        Ok(())
    }

    /// Removes every entry. The capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Iterates over `(key, value)` pairs bucket by bucket, in chain order
    /// within a bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.buckets.iter()
    }

    /// Iterates over mutable values in unspecified order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.buckets.values_mut()
    }

    pub(crate) fn buckets(&self) -> &Buckets<K, V> {
        &self.buckets
    }

    fn grow_as_needed(&mut self) {
        let capacity = self.buckets.capacity();
        if let Some(grown) = self.growth.next_capacity(self.len(), capacity) {
            #[cfg(feature = "logging")]
            log::debug!(
                "load {}/{} exceeds {}; growing hash table to {} buckets",
                self.len(),
                capacity,
                self.growth.load_factor(),
                grown
            );
            self.buckets.rehome(grown);
        }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table with default settings that hashes keys with
    /// `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            buckets: Buckets::with_capacity(DEFAULT_CAPACITY),
            growth: GrowthPolicy::new(DEFAULT_LOAD_FACTOR),
        }
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self {
            hasher,
            buckets: Buckets::with_capacity(config.get_initial_capacity()),
            growth: GrowthPolicy::new(config.get_load_factor()),
        })
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Maps `key` to `value`, returning the value it replaced.
    ///
    /// An existing entry for `key` is updated in place and `len` is
    /// unchanged. Otherwise a new entry is appended to the tail of the key's
    /// chain. Growth is evaluated first, against the size before this insert.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.grow_as_needed();
        let hash = self.make_hash(&key);
        let slot = bucket_index(hash, self.buckets.capacity());
        match self
            .buckets
            .probe(slot, |e| e.hash == hash && e.key == key)
        {
            Probe::Found(k) => Some(core::mem::replace(
                &mut self.buckets.entry_mut(k).value,
                value,
            )),
            Probe::Vacant(tail) => {
                self.buckets.link(slot, tail, Entry::new(key, value, hash));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = bucket_index(hash, self.buckets.capacity());
        self.buckets
            .find(slot, |e| e.hash == hash && e.key.borrow() == key)
            .map(|k| &self.buckets.entry(k).value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = bucket_index(hash, self.buckets.capacity());
        let k = self
            .buckets
            .find(slot, |e| e.hash == hash && e.key.borrow() == key)?;
        Some(&mut self.buckets.entry_mut(k).value)
    }

    /// Returns `true` if `key` has an entry, whatever value it maps to.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = bucket_index(hash, self.buckets.capacity());
        self.buckets
            .find(slot, |e| e.hash == hash && e.key.borrow() == key)
            .is_some()
    }

    /// Removes `key`'s entry and returns its value, or `None` if absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let slot = bucket_index(hash, self.buckets.capacity());
        self.buckets
            .unlink(slot, |e| e.hash == hash && e.key.borrow() == key)
            .map(|e| e.value)
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table
    }
}
