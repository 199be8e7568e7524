//! # Record Parsing Tests
//!
//! Covers tokenisation of result lines, the token-count check, and both value
//! validation modes.

use std::path::Path;

use bpresults_core::{BranchRecord, Category, ResultsError, Validation};
use rstest::rstest;

use crate::common::fixtures::tool_line;

fn parse(line: &str, validation: Validation) -> Result<BranchRecord, ResultsError> {
    BranchRecord::parse(Path::new("bench.out"), line, validation)
}

#[test]
fn test_values_taken_in_category_order() {
    let rec = parse("T 10 U 20 V 30 W 40\n", Validation::Opaque).unwrap();
    assert_eq!(rec.get(Category::TakenCorrect), "10");
    assert_eq!(rec.get(Category::TakenIncorrect), "20");
    assert_eq!(rec.get(Category::NotTakenCorrect), "30");
    assert_eq!(rec.get(Category::NotTakenIncorrect), "40");
}

#[test]
fn test_tool_output_line() {
    let rec = parse(&tool_line(5_000_000_001, 2, 3, 4), Validation::Numeric).unwrap();
    assert_eq!(
        rec.into_values(),
        [
            "5000000001".to_string(),
            "2".to_string(),
            "3".to_string(),
            "4".to_string()
        ]
    );
}

#[rstest]
#[case::no_newline("T 1 U 2 V 3 W 4")]
#[case::lf("T 1 U 2 V 3 W 4\n")]
#[case::crlf("T 1 U 2 V 3 W 4\r\n")]
#[case::several_newlines("T 1 U 2 V 3 W 4\n\n")]
fn test_trailing_newlines_stripped(#[case] line: &str) {
    let rec = parse(line, Validation::Numeric).unwrap();
    assert_eq!(rec.get(Category::NotTakenIncorrect), "4");
}

#[rstest]
#[case::empty("", 0)]
#[case::blank_line("\n", 0)]
#[case::three_pairs("T 1 U 2 V 3\n", 6)]
#[case::missing_last_value("T 1 U 2 V 3 W\n", 7)]
#[case::extra_label("T 1 U 2 V 3 W 4 X\n", 9)]
#[case::five_pairs("T 1 U 2 V 3 W 4 X 5\n", 10)]
#[case::tab_separated("T\t1\tU\t2\tV\t3\tW\t4", 1)]
#[case::tab_in_last_pair("T 1 U 2 V 3 W\t4", 7)]
fn test_wrong_token_count_is_malformed(#[case] line: &str, #[case] expected: usize) {
    match parse(line, Validation::Opaque) {
        Err(ResultsError::MalformedLine { path, found }) => {
            assert_eq!(found, expected);
            assert_eq!(path, Path::new("bench.out"));
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[rstest]
#[case::embedded_newline("T 1 U 2\nV 3 W 4\n")]
#[case::two_lines("T 1 U 2 V 3 W 4\nT 1 U 2 V 3 W 4\n")]
#[case::bare_carriage_return("T 1 U 2 V 3\rW 4")]
#[case::blank_line_first("\nT 1 U 2 V 3 W 4\n")]
fn test_more_than_one_line_is_malformed(#[case] line: &str) {
    match parse(line, Validation::Opaque) {
        Err(ResultsError::MultipleLines { path }) => assert_eq!(path, Path::new("bench.out")),
        other => panic!("expected MultipleLines, got {other:?}"),
    }
}

#[test]
fn test_leading_and_repeated_spaces_ignored() {
    let rec = parse("  T 1   U 2 V 3 W 4  \n", Validation::Numeric).unwrap();
    assert_eq!(rec.get(Category::TakenCorrect), "1");
    assert_eq!(rec.get(Category::NotTakenIncorrect), "4");
}

#[test]
fn test_labels_are_not_checked() {
    let rec = parse("a 1 a 2 a 3 a 4", Validation::Numeric).unwrap();
    assert_eq!(rec.get(Category::TakenIncorrect), "2");
}

#[test]
fn test_opaque_passes_non_numeric_values_verbatim() {
    let rec = parse("T 1.5 U -2 V n/a W 0x10", Validation::Opaque).unwrap();
    assert_eq!(rec.get(Category::TakenCorrect), "1.5");
    assert_eq!(rec.get(Category::TakenIncorrect), "-2");
    assert_eq!(rec.get(Category::NotTakenCorrect), "n/a");
    assert_eq!(rec.get(Category::NotTakenIncorrect), "0x10");
}

#[rstest]
#[case("T x U 2 V 3 W 4", Category::TakenCorrect, "x")]
#[case("T 1 U -2 V 3 W 4", Category::TakenIncorrect, "-2")]
#[case("T 1 U 2 V 3.0 W 4", Category::NotTakenCorrect, "3.0")]
#[case("T 1 U 2 V 3 W 18446744073709551616", Category::NotTakenIncorrect, "18446744073709551616")]
fn test_numeric_rejects_first_bad_value(
    #[case] line: &str,
    #[case] expected_category: Category,
    #[case] expected_value: &str,
) {
    match parse(line, Validation::Numeric) {
        Err(ResultsError::NonNumericValue {
            category, value, ..
        }) => {
            assert_eq!(category, expected_category);
            assert_eq!(value, expected_value);
        }
        other => panic!("expected NonNumericValue, got {other:?}"),
    }
}

#[test]
fn test_category_labels_match_tool_output() {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "takenCorrect",
            "takenIncorrect",
            "notTakenCorrect",
            "notTakenIncorrect"
        ]
    );
    assert_eq!(Category::NotTakenCorrect.to_string(), "notTakenCorrect");
}

#[test]
fn test_category_index_matches_order() {
    for (i, c) in Category::ALL.iter().enumerate() {
        assert_eq!(c.index(), i);
    }
}
