//! # morse-lookup
//!
//! A sorted-vector lookup table and a text-to-Morse-code transliterator
//! built on top of it.
//!
//! ## Overview
//!
//! - **Lookup Table**: [`LookupTable`](lookup::LookupTable), an ordered map
//!   backed by a contiguous sorted `Vec` with O(log n) binary search
//! - **Encoder**: loading a two-column mapping file into a table and
//!   transliterating text line by line
//!
//! ## Feature Flags
//!
//! - `table`: The lookup table and its error type
//! - `encoder`: Mapping file loader, transliteration, prompts and configuration
//! - `cli`: The `morse-encoder` binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use morse_lookup::prelude::*;
//!
//! let mut table = LookupTable::new();
//! table.put("T".to_string(), "-".to_string());
//! table.put("E".to_string(), ".".to_string());
//!
//! assert_eq!(table.get("E"), Some(&".".to_string()));
//! assert!(!table.contains_key("Z"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use morse_lookup::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "table")]
    pub use crate::lookup::*;

    #[cfg(feature = "encoder")]
    pub use crate::encoder::*;
}

#[cfg(feature = "table")]
pub mod lookup;

#[cfg(feature = "encoder")]
pub mod encoder;
