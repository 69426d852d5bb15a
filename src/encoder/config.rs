//! Encoder configuration management.
//!
//! Configuration is read from environment variables, after loading a
//! `.env` file from the working directory if one exists. Every variable is
//! optional; command-line flags override whatever is found here.
//!
//! # Environment Variables
//!
//! - `MORSE_TABLE_PATH`: Mapping file (default: `data/morsecode.txt`)
//! - `MORSE_INPUT_PATH`: Text file to encode (prompted for if unset)
//! - `MORSE_OUTPUT_PATH`: Destination file (prompted for if unset)
//!
//! # Example
//!
//! ```rust,ignore
//! use morse_lookup::encoder::EncoderConfig;
//!
//! let config = EncoderConfig::from_env()?;
//! println!("Mapping table: {}", config.table_path.display());
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Bundled mapping file, relative to the working directory.
pub const DEFAULT_TABLE_PATH: &str = "data/morsecode.txt";

const TABLE_PATH_VAR: &str = "MORSE_TABLE_PATH";
const INPUT_PATH_VAR: &str = "MORSE_INPUT_PATH";
const OUTPUT_PATH_VAR: &str = "MORSE_OUTPUT_PATH";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Encoder configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Two-column mapping file loaded into the lookup table.
    pub table_path: PathBuf,
    /// Text file to encode, if known up front.
    pub input_path: Option<PathBuf>,
    /// Destination of the encoded lines, if known up front.
    pub output_path: Option<PathBuf>,
}

impl EncoderConfig {
    /// Creates a new `EncoderConfig` with the given values.
    #[must_use]
    pub const fn new(
        table_path: PathBuf,
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            table_path,
            input_path,
            output_path,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env files are fine
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key))
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `lookup` reports a value that
    /// is not valid Unicode.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let table_path = get_optional_path(&lookup, TABLE_PATH_VAR)?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));
        let input_path = get_optional_path(&lookup, INPUT_PATH_VAR)?;
        let output_path = get_optional_path(&lookup, OUTPUT_PATH_VAR)?;

        Ok(Self {
            table_path,
            input_path,
            output_path,
        })
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_TABLE_PATH), None, None)
    }
}

/// Reads an optional path variable. Empty values count as unset.
fn get_optional_path<F>(lookup: &F, key: &str) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}
