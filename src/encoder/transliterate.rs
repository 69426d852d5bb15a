//! Text to Morse code transliteration.
//!
//! Every input line becomes one output line. Each line is upper-cased and
//! split into words on single spaces; every character of a word is looked
//! up in the [`MorseTable`] and its code written followed by a space.
//! After each word the [`WORD_BOUNDARY`] marker is appended, as long as the
//! line has produced any output so far. Characters the table does not map
//! are skipped and reported.
//!
//! # Examples
//!
//! ```rust
//! use morse_lookup::encoder::{encode_line, load_table};
//!
//! let table = load_table("S\t...\nO\t---\n".as_bytes()).unwrap();
//! let encoded = encode_line(&table, "sos");
//!
//! assert_eq!(encoded.text, "... --- ... | ");
//! assert!(encoded.skipped.is_empty());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::error::EncoderError;
use super::loader::MorseTable;

/// Marker appended after every word.
pub const WORD_BOUNDARY: &str = "| ";

/// The result of encoding a single line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedLine {
    /// Encoded output, without a line terminator.
    pub text: String,
    /// Characters that had no mapping, in order of appearance.
    pub skipped: Vec<char>,
}

/// Totals for a whole encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeSummary {
    /// Lines written.
    pub lines: usize,
    /// Characters skipped across all lines.
    pub skipped: usize,
}

/// Encodes one line of text.
///
/// Keys are looked up one character at a time, case-sensitively, after the
/// line has been upper-cased.
pub fn encode_line(table: &MorseTable, line: &str) -> EncodedLine {
    let upper = line.to_uppercase();
    let mut encoded = EncodedLine::default();
    let mut buffer = [0_u8; 4];

    // Trailing separators produce no words.
    for word in upper.trim_end_matches(' ').split(' ') {
        for character in word.chars() {
            let key: &str = character.encode_utf8(&mut buffer);
            if let Some(code) = table.get(key) {
                encoded.text.push_str(code);
                encoded.text.push(' ');
            } else {
                tracing::warn!(%character, "skipping unmapped character");
                encoded.skipped.push(character);
            }
        }
        if !encoded.text.is_empty() {
            encoded.text.push_str(WORD_BOUNDARY);
        }
    }

    encoded
}

/// Encodes every line of `reader` and writes one line per input line to
/// `writer`.
///
/// # Errors
///
/// Returns [`EncoderError::Stream`] if reading or writing fails.
///
/// # Examples
///
/// ```rust
/// use morse_lookup::encoder::{encode, load_table};
///
/// let table = load_table("E\t.\nT\t-\n".as_bytes()).unwrap();
/// let mut output = Vec::new();
///
/// let summary = encode(&table, "te\net\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(summary.lines, 2);
/// assert_eq!(String::from_utf8(output).unwrap(), "- . | \n. - | \n");
/// ```
pub fn encode<R, W>(table: &MorseTable, reader: R, mut writer: W) -> Result<EncodeSummary, EncoderError>
where
    R: BufRead,
    W: Write,
{
    let (lines, summary) = encode_lines(table, reader)?;
    write_lines(&lines, &mut writer)?;

    tracing::info!(lines = summary.lines, skipped = summary.skipped, "encoding finished");
    Ok(summary)
}

/// Encodes the file at `input` into the file at `output`.
///
/// The whole input is encoded before `output` is created or truncated, so
/// `input` and `output` may name the same file.
///
/// # Errors
///
/// Returns [`EncoderError::File`] if either file cannot be opened, and
/// [`EncoderError::Stream`] if reading or writing fails afterwards.
pub fn encode_file(
    table: &MorseTable,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<EncodeSummary, EncoderError> {
    let input = input.as_ref();
    let output = output.as_ref();

    tracing::debug!(input = %input.display(), output = %output.display(), "encoding file");
    let reader = File::open(input).map_err(|source| EncoderError::file(input, source))?;
    let (lines, summary) = encode_lines(table, BufReader::new(reader))?;

    let writer = File::create(output).map_err(|source| EncoderError::file(output, source))?;
    write_lines(&lines, &mut BufWriter::new(writer))?;

    tracing::info!(lines = summary.lines, skipped = summary.skipped, "encoding finished");
    Ok(summary)
}

/// Encodes every line of `reader` into memory.
fn encode_lines<R: BufRead>(
    table: &MorseTable,
    reader: R,
) -> Result<(Vec<String>, EncodeSummary), EncoderError> {
    let mut summary = EncodeSummary::default();
    let mut lines = Vec::new();

    for line in reader.lines() {
        let encoded = encode_line(table, &line?);
        summary.lines += 1;
        summary.skipped += encoded.skipped.len();
        lines.push(encoded.text);
    }

    Ok((lines, summary))
}

fn write_lines<W: Write>(lines: &[String], writer: &mut W) -> Result<(), EncoderError> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::load_table;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> MorseTable {
        load_table("A\t.-\nE\t.\nH\t....\nI\t..\nT\t-\n".as_bytes()).unwrap()
    }

    #[rstest]
    #[case("", "")]
    #[case("e", ". | ")]
    #[case("hi", ".... .. | ")]
    #[case("hi at", ".... .. | .- - | ")]
    #[case("hi   ", ".... .. | ")]
    #[case("hi  at", ".... .. | | .- - | ")]
    #[case(" hi", ".... .. | ")]
    fn test_encodes_words_with_boundaries(
        table: MorseTable,
        #[case] line: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(encode_line(&table, line).text, expected);
    }

    #[rstest]
    fn test_skips_unmapped_characters(table: MorseTable) {
        let encoded = encode_line(&table, "hat!");

        assert_eq!(encoded.text, ".... .- - | ");
        assert_eq!(encoded.skipped, vec!['!']);
    }

    #[rstest]
    fn test_word_of_only_unmapped_characters_adds_no_leading_boundary(table: MorseTable) {
        let encoded = encode_line(&table, "?? hi");

        assert_eq!(encoded.text, ".... .. | ");
        assert_eq!(encoded.skipped, vec!['?', '?']);
    }

    #[rstest]
    fn test_lookup_is_case_sensitive_after_upper_casing() {
        let table = load_table("e\t.\n".as_bytes()).unwrap();
        let encoded = encode_line(&table, "e");

        assert_eq!(encoded.text, "");
        assert_eq!(encoded.skipped, vec!['E']);
    }

    #[rstest]
    fn test_encode_counts_lines_and_skips(table: MorseTable) {
        let mut output = Vec::new();
        let summary = encode(&table, "hi\n\nat?\n".as_bytes(), &mut output).unwrap();

        assert_eq!(summary, EncodeSummary { lines: 3, skipped: 1 });
        assert_eq!(
            String::from_utf8(output).unwrap(),
            ".... .. | \n\n.- - | \n"
        );
    }
}
