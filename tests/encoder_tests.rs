//! Integration tests for the encoding pipeline.
//!
//! Loads the bundled `data/morsecode.txt` table and encodes files end to end.

use std::fs;
use std::path::{Path, PathBuf};

use morse_lookup::encoder::{
    EncoderError, MorseTable, encode_file, encode_line, load_table, load_table_from_path,
};
use rstest::{fixture, rstest};

fn bundled_table_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/morsecode.txt")
}

#[fixture]
fn table() -> MorseTable {
    load_table_from_path(bundled_table_path()).unwrap()
}

// =============================================================================
// Table Loading Tests
// =============================================================================

#[rstest]
fn test_bundled_table_maps_letters_digits_and_punctuation(table: MorseTable) {
    assert_eq!(table.len(), 54);
    assert_eq!(table.get("A"), Some(&".-".to_string()));
    assert_eq!(table.get("0"), Some(&"-----".to_string()));
    assert_eq!(table.get("?"), Some(&"..--..".to_string()));
    assert!(!table.contains_key("a"));
}

#[rstest]
fn test_bundled_table_iterates_in_key_order(table: MorseTable) {
    let keys: Vec<&String> = table.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(keys, sorted);
}

#[rstest]
fn test_loading_missing_table_fails_with_path() {
    let directory = tempfile::tempdir().unwrap();
    let missing = directory.path().join("absent.txt");

    let error = load_table_from_path(&missing).unwrap_err();

    assert!(matches!(error, EncoderError::File { ref path, .. } if *path == missing));
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[rstest]
#[case("SOS", "... --- ... | ")]
#[case("sos", "... --- ... | ")]
#[case("Hello, World", ".... . .-.. .-.. --- --..-- | .-- --- .-. .-.. -.. | ")]
#[case("r2-d2", ".-. ..--- -....- -.. ..--- | ")]
fn test_encode_line_with_bundled_table(
    table: MorseTable,
    #[case] line: &str,
    #[case] expected: &str,
) {
    assert_eq!(encode_line(&table, line).text, expected);
}

#[rstest]
fn test_encode_file_writes_one_line_per_input_line(table: MorseTable) {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("plain.txt");
    let output = directory.path().join("encoded.txt");
    fs::write(&input, "sos\n\nhi there#\n").unwrap();

    let summary = encode_file(&table, &input, &output).unwrap();

    assert_eq!(summary.lines, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "... --- ... | \n\n.... .. | - .... . .-. . | \n"
    );
}

#[rstest]
fn test_encode_file_truncates_existing_output(table: MorseTable) {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("plain.txt");
    let output = directory.path().join("encoded.txt");
    fs::write(&input, "e\n").unwrap();
    fs::write(&output, "stale content that is longer\n").unwrap();

    encode_file(&table, &input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), ". | \n");
}

#[rstest]
fn test_encode_file_in_place_reads_input_before_truncating(table: MorseTable) {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("text.txt");
    fs::write(&path, "te\net\n").unwrap();

    let summary = encode_file(&table, &path, &path).unwrap();

    assert_eq!(summary.lines, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "- . | \n. - | \n");
}

#[rstest]
fn test_encode_file_missing_input_reports_path(table: MorseTable) {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("absent.txt");
    let output = directory.path().join("encoded.txt");

    let error = encode_file(&table, &input, &output).unwrap_err();

    assert!(matches!(error, EncoderError::File { ref path, .. } if *path == input));
    assert!(!output.exists());
}

#[rstest]
fn test_custom_table_overrides_bundled_codes() {
    let table = load_table("E\tdit\nT\tdah\n".as_bytes()).unwrap();

    assert_eq!(encode_line(&table, "tee").text, "dah dit dit | ");
}
