//! Error types for the checked lookup table operations.

use thiserror::Error;

/// The keyed operation that rejected an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOperation {
    /// [`LookupTable::try_put`](super::LookupTable::try_put).
    Put,
    /// [`LookupTable::try_get`](super::LookupTable::try_get).
    Get,
    /// [`LookupTable::try_contains_key`](super::LookupTable::try_contains_key).
    ContainsKey,
    /// [`LookupTable::try_remove`](super::LookupTable::try_remove).
    Remove,
}

impl std::fmt::Display for KeyOperation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Put => write!(formatter, "put"),
            Self::Get => write!(formatter, "get"),
            Self::ContainsKey => write!(formatter, "contains_key"),
            Self::Remove => write!(formatter, "remove"),
        }
    }
}

/// Errors produced by the checked lookup table operations.
///
/// A key that is not in the table is a miss, not an error. The only failure
/// is an absent key argument, which is rejected before the table is
/// searched or mutated.
///
/// # Examples
///
/// ```rust
/// use morse_lookup::lookup::{KeyOperation, LookupError, LookupTable};
///
/// let mut table: LookupTable<String, String> = LookupTable::new();
/// let error = table.try_put(None, ".".to_string()).unwrap_err();
///
/// assert_eq!(error, LookupError::AbsentKey { operation: KeyOperation::Put });
/// assert_eq!(error.to_string(), "put: key cannot be absent");
/// assert!(table.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A keyed operation was called without a key.
    #[error("{operation}: key cannot be absent")]
    AbsentKey {
        /// The operation that received the absent key.
        operation: KeyOperation,
    },
}

impl LookupError {
    /// Creates an [`LookupError::AbsentKey`] for the given operation.
    #[must_use]
    pub const fn absent_key(operation: KeyOperation) -> Self {
        Self::AbsentKey { operation }
    }

    /// Returns `true` if this is an absent-key error.
    #[must_use]
    pub const fn is_absent_key(&self) -> bool {
        matches!(self, Self::AbsentKey { .. })
    }
}
