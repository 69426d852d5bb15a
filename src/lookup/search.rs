//! Binary search over a slice sorted by key.

use std::cmp::Ordering;

/// The outcome of a single binary search pass.
///
/// One search answers both questions a keyed operation needs: whether the
/// key is present, and where it lives or would be inserted.
///
/// # Examples
///
/// ```rust
/// use morse_lookup::lookup::SearchResult;
///
/// let found = SearchResult::Found(2);
/// assert!(found.is_found());
/// assert_eq!(found.index(), 2);
///
/// let vacant = SearchResult::Vacant(0);
/// assert!(!vacant.is_found());
/// assert_eq!(vacant.index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// The key is stored at this index.
    Found(usize),
    /// The key is absent; this is the index of the first greater entry,
    /// or the length of the sequence if every entry is smaller.
    Vacant(usize),
}

impl SearchResult {
    /// Returns `true` if the key was located.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the index carried by the result: the position of the entry
    /// when found, the insertion point otherwise.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::Vacant(index) => index,
        }
    }

    /// Returns the position of the entry if the key was located.
    #[inline]
    #[must_use]
    pub const fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Vacant(_) => None,
        }
    }
}

/// Searches `entries`, which must be sorted ascending under `compare`.
///
/// `compare` receives one entry and reports how it orders relative to the
/// key being searched for.
pub(crate) fn binary_search_by<T, F>(entries: &[T], mut compare: F) -> SearchResult
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = entries.len();

    while low < high {
        let middle = low + (high - low) / 2;
        match compare(&entries[middle]) {
            Ordering::Equal => return SearchResult::Found(middle),
            Ordering::Greater => high = middle,
            Ordering::Less => low = middle + 1,
        }
    }

    SearchResult::Vacant(low)
}
