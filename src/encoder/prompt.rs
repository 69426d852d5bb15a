//! Interactive filename prompts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::error::EncoderError;

/// Printed when a filename that must exist does not.
pub const MISSING_FILE_MESSAGE: &str = "File does not exist. Please try again.";

/// Asks for a filename until an acceptable one is entered.
///
/// Writes `prompt` to `output`, then takes the first whitespace-separated
/// token from `input`. With `must_exist` set, a path that does not exist is
/// answered with [`MISSING_FILE_MESSAGE`] and the prompt is repeated.
///
/// # Errors
///
/// Returns [`EncoderError::InputClosed`] if `input` ends first, or
/// [`EncoderError::Stream`] if reading or writing fails.
///
/// # Examples
///
/// ```rust
/// use morse_lookup::encoder::prompt_filename;
/// use std::path::PathBuf;
///
/// let mut input = "encoded.txt\n".as_bytes();
/// let mut output = Vec::new();
///
/// let path = prompt_filename(&mut input, &mut output, "Enter an output filename:", false).unwrap();
///
/// assert_eq!(path, PathBuf::from("encoded.txt"));
/// assert_eq!(String::from_utf8(output).unwrap(), "Enter an output filename:\n");
/// ```
pub fn prompt_filename<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    must_exist: bool,
) -> Result<PathBuf, EncoderError>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        let path = next_token(input)?
            .map(PathBuf::from)
            .ok_or(EncoderError::InputClosed)?;
        if !must_exist || path.exists() {
            return Ok(path);
        }

        tracing::debug!(path = %path.display(), "prompted file does not exist");
        writeln!(output, "{MISSING_FILE_MESSAGE}")?;
    }
}

/// Reads lines until one contains a token. `None` at end of input.
fn next_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
