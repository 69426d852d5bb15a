//! Loading a two-column mapping file into a [`MorseTable`].
//!
//! Each non-blank line holds one record: a key, a run of tabs or spaces,
//! and the code for that key. Fields after the second are ignored.
//!
//! ```text
//! A	.-
//! B	-...
//! E   .
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::EncoderError;
use crate::lookup::LookupTable;

/// A lookup table from single-character keys to their Morse codes.
pub type MorseTable = LookupTable<String, String>;

/// Reads mapping records from `reader` into a new table.
///
/// Blank lines are skipped. A later record for the same key replaces the
/// earlier one.
///
/// # Errors
///
/// - [`EncoderError::MalformedRecord`] if a record has no code field
/// - [`EncoderError::Stream`] if reading fails
///
/// # Examples
///
/// ```rust
/// use morse_lookup::encoder::load_table;
///
/// let table = load_table("E\t.\nT -\n".as_bytes()).unwrap();
/// assert_eq!(table.get("E"), Some(&".".to_string()));
/// assert_eq!(table.get("T"), Some(&"-".to_string()));
/// ```
pub fn load_table<R: BufRead>(reader: R) -> Result<MorseTable, EncoderError> {
    let mut table = MorseTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let mut fields = line.split_whitespace();
        let Some(key) = fields.next() else {
            continue;
        };
        let code = fields.next().ok_or_else(|| EncoderError::MalformedRecord {
            line: line_number,
            content: line.trim_end().to_string(),
        })?;

        if let Some(previous) = table.put(key.to_string(), code.to_string()) {
            tracing::debug!(line = line_number, key, %previous, "mapping record overrides earlier one");
        }
    }

    tracing::debug!(entries = table.len(), "mapping table loaded");
    Ok(table)
}

/// Opens `path` and reads its mapping records into a new table.
///
/// # Errors
///
/// Returns [`EncoderError::File`] if the file cannot be opened, otherwise
/// any error of [`load_table`].
pub fn load_table_from_path(path: impl AsRef<Path>) -> Result<MorseTable, EncoderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| EncoderError::file(path, source))?;

    tracing::debug!(path = %path.display(), "loading mapping table");
    load_table(BufReader::new(file))
}
