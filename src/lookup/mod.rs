//! Sorted-vector lookup table.
//!
//! This module provides [`LookupTable`], an ordered map that keeps its
//! entries in a single contiguous `Vec` sorted by key:
//!
//! - [`LookupTable`]: The table itself
//! - [`SearchResult`]: Outcome of one binary search pass
//! - [`LookupError`]: Invalid-argument errors of the checked operations
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `get`          | O(log n)   |
//! | `contains_key` | O(log n)   |
//! | `put`          | O(n)       |
//! | `remove`       | O(n)       |
//! | `len`          | O(1)       |
//! | `clear`        | O(n)       |
//!
//! `put` and `remove` locate their slot in O(log n) but shift the entries
//! after it, which is linear in the worst case.
//!
//! # Examples
//!
//! ```rust
//! use morse_lookup::lookup::LookupTable;
//!
//! let mut table = LookupTable::new();
//! table.put("T", "-");
//! table.put("E", ".");
//! table.put("A", ".-");
//!
//! // Entries are always in sorted order
//! let keys: Vec<&&str> = table.keys().collect();
//! assert_eq!(keys, vec![&"A", &"E", &"T"]);
//!
//! // Replacing a value hands back the previous one
//! assert_eq!(table.put("E", "-"), Some("."));
//! assert_eq!(table.len(), 3);
//! ```

mod error;
mod search;
mod table;

pub use error::KeyOperation;
pub use error::LookupError;
pub use search::SearchResult;
pub use table::LookupTable;
pub use table::LookupTableIntoIterator;
pub use table::LookupTableIterator;
