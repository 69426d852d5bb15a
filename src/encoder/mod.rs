//! Text to Morse code encoding built on [`LookupTable`](crate::lookup::LookupTable).
//!
//! This module provides the pipeline around the lookup table:
//!
//! - [`load_table`] / [`load_table_from_path`]: Read a two-column mapping file
//! - [`encode_line`] / [`encode`] / [`encode_file`]: Transliterate text
//! - [`prompt_filename`]: Ask for input and output paths interactively
//! - [`EncoderConfig`]: Paths from the environment
//!
//! # Examples
//!
//! ```rust
//! use morse_lookup::encoder::{encode, load_table};
//!
//! let table = load_table("H\t....\nI\t..\n".as_bytes()).unwrap();
//! let mut output = Vec::new();
//! encode(&table, "hi hi\n".as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), ".... .. | .... .. | \n");
//! ```

mod config;
mod error;
mod loader;
mod prompt;
mod transliterate;

pub use config::ConfigError;
pub use config::DEFAULT_TABLE_PATH;
pub use config::EncoderConfig;
pub use error::EncoderError;
pub use loader::MorseTable;
pub use loader::load_table;
pub use loader::load_table_from_path;
pub use prompt::MISSING_FILE_MESSAGE;
pub use prompt::prompt_filename;
pub use transliterate::EncodeSummary;
pub use transliterate::EncodedLine;
pub use transliterate::WORD_BOUNDARY;
pub use transliterate::encode;
pub use transliterate::encode_file;
pub use transliterate::encode_line;
