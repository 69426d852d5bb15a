//! Ordered map backed by a sorted `Vec`.
//!
//! This module provides [`LookupTable`], a mutable ordered map that stores
//! its entries contiguously in ascending key order and finds them by binary
//! search.
//!
//! # Overview
//!
//! `LookupTable` trades the pointer-chasing of a tree for a flat array:
//!
//! - O(log N) get and `contains_key`
//! - O(N) put and remove (binary search, then shift)
//! - O(1) len and `is_empty`
//! - O(N) in-order iteration with no extra sorting
//!
//! A single search pass answers every keyed operation: the
//! [`SearchResult`] it returns tells `get` where the entry is, tells `put`
//! where a new entry belongs, and tells `remove` what to delete.
//!
//! # Examples
//!
//! ```rust
//! use morse_lookup::lookup::LookupTable;
//!
//! let mut table = LookupTable::new();
//! assert_eq!(table.put("E", "."), None);
//! assert_eq!(table.put("T", "-"), None);
//!
//! assert_eq!(table.get("T"), Some(&"-"));
//! assert_eq!(table.get("Z"), None);
//!
//! assert_eq!(table.remove("E"), Some("."));
//! assert_eq!(table.len(), 1);
//! ```
//!
//! # Invariants
//!
//! 1. Entries are strictly ascending by key after every operation
//! 2. No two entries share a key
//! 3. A stored key is never handed out mutably; only values can change
//!
//! The key type's `Ord` must be a total order. An inconsistent `Ord` leaves
//! the entry order unspecified.

use std::borrow::Borrow;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

use super::error::{KeyOperation, LookupError};
use super::search::{SearchResult, binary_search_by};

// =============================================================================
// Entry Definition
// =============================================================================

/// One key/value pair. Ordered and compared by the table through `key` only.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Entry<K, V> {
    key: K,
    value: V,
}

// =============================================================================
// LookupTable Definition
// =============================================================================

/// An ordered map backed by a contiguous, sorted `Vec`.
///
/// Entries are kept in ascending key order with no duplicate keys. Lookups
/// binary-search the vector; insertions and removals shift the tail.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Ord` for keyed operations.
/// * `V` - The value type. Unconstrained.
///
/// # Examples
///
/// ```rust
/// use morse_lookup::lookup::LookupTable;
///
/// let table: LookupTable<&str, &str> =
///     [("T", "-"), ("E", "."), ("A", ".-")].into_iter().collect();
///
/// let entries: Vec<(&&str, &&str)> = table.iter().collect();
/// assert_eq!(entries, vec![(&"A", &".-"), (&"E", &"."), (&"T", &"-")]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LookupTable<K, V> {
    entries: Vec<Entry<K, V>>,
}

static_assertions::assert_impl_all!(LookupTable<String, String>: Send, Sync, Clone, Default);

impl<K, V> LookupTable<K, V> {
    /// Creates a new empty table.
    ///
    /// Does not allocate until the first entry is put.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let table: LookupTable<String, String> = LookupTable::new();
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty table able to hold at least `capacity` entries
    /// without reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let table: LookupTable<char, &str> = LookupTable::with_capacity(64);
    /// assert!(table.capacity() >= 64);
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the table.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the table can hold without reallocating.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Removes every entry. The allocated capacity is kept for reuse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table = LookupTable::new();
    /// table.put(1, "one");
    /// table.clear();
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table = LookupTable::new();
    /// table.put(2, "two");
    /// table.put(1, "one");
    ///
    /// let mut iterator = table.iter();
    /// assert_eq!(iterator.next(), Some((&1, &"one")));
    /// assert_eq!(iterator.next(), Some((&2, &"two")));
    /// assert_eq!(iterator.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> LookupTableIterator<'_, K, V> {
        LookupTableIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Returns `true` if the keys are strictly ascending.
    fn is_strictly_ascending(&self) -> bool
    where
        K: Ord,
    {
        self.entries
            .windows(2)
            .all(|pair| pair[0].key < pair[1].key)
    }
}

impl<K: Ord, V> LookupTable<K, V> {
    /// Binary-searches the entries for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::{LookupTable, SearchResult};
    ///
    /// let mut table = LookupTable::new();
    /// table.put("A", ".-");
    /// table.put("T", "-");
    ///
    /// assert_eq!(table.search("T"), SearchResult::Found(1));
    /// assert_eq!(table.search("E"), SearchResult::Vacant(1));
    /// ```
    #[inline]
    pub fn search<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        binary_search_by(&self.entries, |entry| entry.key.borrow().cmp(key))
    }

    /// Associates `value` with `key`.
    ///
    /// If the table already holds `key`, its value is replaced in place and
    /// the previous value is returned; the stored key is left untouched.
    /// Otherwise a new entry is inserted at the key's sorted position and
    /// `None` is returned.
    ///
    /// # Complexity
    ///
    /// O(log N) to locate the slot, plus O(N) shifting on insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table = LookupTable::new();
    /// assert_eq!(table.put("E", "."), None);
    /// assert_eq!(table.put("E", "-"), Some("."));
    /// assert_eq!(table.get("E"), Some(&"-"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            SearchResult::Found(index) => {
                Some(std::mem::replace(&mut self.entries[index].value, value))
            }
            SearchResult::Vacant(index) => {
                self.entries.insert(index, Entry { key, value });
                debug_assert!(
                    self.is_strictly_ascending(),
                    "LookupTable entries must be strictly ascending by key"
                );
                None
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// A miss returns `None`. When `V` can itself represent "no value"
    /// (for example `Option<T>`), use [`contains_key`](Self::contains_key)
    /// to tell a miss apart from a stored empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table: LookupTable<&str, Option<&str>> = LookupTable::new();
    /// table.put("?", None);
    ///
    /// assert_eq!(table.get("?"), Some(&None));
    /// assert_eq!(table.get("!"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
            .found()
            .map(|index| &self.entries[index].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Only the value is reachable; keys can never be changed in place.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
            .found()
            .map(|index| &mut self.entries[index].value)
    }

    /// Returns `true` if the table holds an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_found()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// Entries after the removed one shift down by one position. A miss
    /// leaves the table unchanged and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table = LookupTable::new();
    /// table.put("E", ".");
    /// table.put("T", "-");
    ///
    /// assert_eq!(table.remove("E"), Some("."));
    /// assert_eq!(table.remove("E"), None);
    /// assert!(!table.contains_key("E"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
            .found()
            .map(|index| self.entries.remove(index).value)
    }

    /// Like [`put`](Self::put), but rejects an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AbsentKey`] if `key` is `None`. The table is
    /// not modified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morse_lookup::lookup::LookupTable;
    ///
    /// let mut table = LookupTable::new();
    /// assert_eq!(table.try_put(Some("E"), "."), Ok(None));
    /// assert!(table.try_put(None, "-").is_err());
    /// assert_eq!(table.get("E"), Some(&"."));
    /// ```
    pub fn try_put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, LookupError> {
        let key = key.ok_or(LookupError::absent_key(KeyOperation::Put))?;
        Ok(self.put(key, value))
    }

    /// Like [`get`](Self::get), but rejects an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AbsentKey`] if `key` is `None`.
    pub fn try_get<Q>(&self, key: Option<&Q>) -> Result<Option<&V>, LookupError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let key = key.ok_or(LookupError::absent_key(KeyOperation::Get))?;
        Ok(self.get(key))
    }

    /// Like [`contains_key`](Self::contains_key), but rejects an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AbsentKey`] if `key` is `None`.
    pub fn try_contains_key<Q>(&self, key: Option<&Q>) -> Result<bool, LookupError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let key = key.ok_or(LookupError::absent_key(KeyOperation::ContainsKey))?;
        Ok(self.contains_key(key))
    }

    /// Like [`remove`](Self::remove), but rejects an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AbsentKey`] if `key` is `None`. The table is
    /// not modified in that case.
    pub fn try_remove<Q>(&mut self, key: Option<&Q>) -> Result<Option<V>, LookupError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let key = key.ok_or(LookupError::absent_key(KeyOperation::Remove))?;
        Ok(self.remove(key))
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the entries of a [`LookupTable`] in ascending key order.
pub struct LookupTableIterator<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for LookupTableIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for LookupTableIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for LookupTableIterator<'_, K, V> {}

impl<K, V> FusedIterator for LookupTableIterator<'_, K, V> {}

/// An owning iterator over the entries of a [`LookupTable`].
pub struct LookupTableIntoIterator<K, V> {
    inner: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for LookupTableIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for LookupTableIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (entry.key, entry.value))
    }
}

impl<K, V> ExactSizeIterator for LookupTableIntoIterator<K, V> {}

impl<K, V> FusedIterator for LookupTableIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for LookupTable<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for LookupTable<K, V> {
    /// Puts every pair in order; later pairs overwrite earlier ones.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LookupTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> IntoIterator for LookupTable<K, V> {
    type Item = (K, V);
    type IntoIter = LookupTableIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        LookupTableIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LookupTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = LookupTableIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, Q> Index<&Q> for LookupTable<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the table holds no entry for `key`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LookupTable<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
