use std::fs;
use std::io::{Cursor, Write};

use classifier_performance::EvalError;
use classifier_performance::io::table::{parse_predictions, read_predictions};
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

fn eval_error(err: &anyhow::Error) -> EvalError {
    err.downcast_ref::<EvalError>()
        .cloned()
        .expect("expected an EvalError")
}

#[test]
fn parse_columns_in_either_order() {
    let a = parse_predictions(Cursor::new("prediction label\n0.9 1\n0.1 0\n")).unwrap();
    let b = parse_predictions(Cursor::new("labels predictions\n1 0.9\n0 0.1\n")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.scores(), &[0.9, 0.1]);
    assert_eq!(a.labels(), &[1, 0]);
}

#[test]
fn parse_skips_blank_lines_and_extra_whitespace() {
    let ds = parse_predictions(Cursor::new("\n  predictions\tlabels\n\n0.5   1\n\t0.25 0  \n\n"))
        .unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.n_pos(), 1);
}

#[test]
fn parse_header_only_is_empty() {
    let err = parse_predictions(Cursor::new("prediction label\n")).unwrap_err();
    assert_eq!(eval_error(&err), EvalError::EmptyDataset);
}

#[test]
fn parse_no_input_is_empty() {
    let err = parse_predictions(Cursor::new("")).unwrap_err();
    assert_eq!(eval_error(&err), EvalError::EmptyDataset);
}

#[test]
fn parse_missing_prediction_column() {
    let err = parse_predictions(Cursor::new("score label\n0.1 0\n")).unwrap_err();
    assert_eq!(eval_error(&err), EvalError::MissingColumn("predictions"));
}

#[test]
fn parse_three_column_header_rejected() {
    let err = parse_predictions(Cursor::new("id prediction label\n")).unwrap_err();
    assert!(matches!(eval_error(&err), EvalError::InvalidHeader(_)));
}

#[test]
fn parse_label_two_rejected_with_line() {
    let err = parse_predictions(Cursor::new("prediction label\n0.1 0\n0.2 2\n")).unwrap_err();
    match eval_error(&err) {
        EvalError::MalformedRow { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_bad_float_rejected() {
    let err = parse_predictions(Cursor::new("prediction label\nabc 1\n")).unwrap_err();
    assert!(matches!(
        eval_error(&err),
        EvalError::MalformedRow { line: 2, .. }
    ));
}

#[test]
fn parse_short_row_rejected() {
    let err = parse_predictions(Cursor::new("prediction label\n0.3\n")).unwrap_err();
    assert!(matches!(
        eval_error(&err),
        EvalError::MalformedRow { line: 2, .. }
    ));
}

#[test]
fn read_plain_and_gz_files() {
    let tmp = TempDir::new().unwrap();
    let content = "prediction label\n0.8 1\n0.3 0\n0.6 1\n";

    let plain = tmp.path().join("preds.table");
    fs::write(&plain, content).unwrap();

    let gz = tmp.path().join("preds.table.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    fs::write(&gz, enc.finish().unwrap()).unwrap();

    let a = read_predictions(Some(&plain)).unwrap();
    let b = read_predictions(Some(&gz)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

#[test]
fn read_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.table");
    assert!(read_predictions(Some(&missing)).is_err());
}
