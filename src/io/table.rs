//! Reader for whitespace-delimited predictions tables.
//!
//! The first non-blank line is a header naming exactly two columns, one of
//! `prediction`/`predictions` and one of `label`/`labels`, in either order.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::EvalError;
use crate::io::open_input;
use crate::perf::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    prediction: usize,
    label: usize,
}

pub fn read_predictions(path: Option<&Path>) -> Result<Dataset> {
    let reader = open_input(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    parse_predictions(reader)
        .with_context(|| format!("failed to read predictions from {}", source))
}

pub fn parse_predictions<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut columns = None;
    let mut scores = Vec::new();
    let mut labels = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let Some(cols) = columns else {
            columns = Some(parse_header(&fields)?);
            continue;
        };
        if fields.len() != 2 {
            return Err(EvalError::MalformedRow {
                line: line_no,
                reason: format!("expected 2 columns, found {}", fields.len()),
            }
            .into());
        }
        let score = parse_score(fields[cols.prediction], line_no)?;
        let label = parse_label(fields[cols.label], line_no)?;
        scores.push(score);
        labels.push(label);
    }

    Ok(Dataset::new(scores, &labels)?)
}

fn parse_header(fields: &[&str]) -> Result<Columns, EvalError> {
    if fields.len() != 2 {
        return Err(EvalError::InvalidHeader(format!(
            "expected 2 columns, found {}",
            fields.len()
        )));
    }
    let prediction = fields
        .iter()
        .position(|f| *f == "prediction" || *f == "predictions")
        .ok_or(EvalError::MissingColumn("predictions"))?;
    let label = fields
        .iter()
        .position(|f| *f == "label" || *f == "labels")
        .ok_or(EvalError::MissingColumn("labels"))?;
    Ok(Columns { prediction, label })
}

fn parse_score(field: &str, line: usize) -> Result<f64, EvalError> {
    let score: f64 = field.parse().map_err(|_| EvalError::MalformedRow {
        line,
        reason: format!("invalid prediction `{}'", field),
    })?;
    if score.is_nan() {
        return Err(EvalError::MalformedRow {
            line,
            reason: "prediction is NaN".to_string(),
        });
    }
    Ok(score)
}

fn parse_label(field: &str, line: usize) -> Result<i64, EvalError> {
    let label: i64 = field.parse().map_err(|_| EvalError::MalformedRow {
        line,
        reason: format!("invalid label `{}'", field),
    })?;
    if label != 0 && label != 1 {
        return Err(EvalError::MalformedRow {
            line,
            reason: format!("invalid label `{}' observed", label),
        });
    }
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_in_either_order() {
        assert_eq!(
            parse_header(&["labels", "prediction"]).unwrap(),
            Columns {
                prediction: 1,
                label: 0
            }
        );
        assert_eq!(
            parse_header(&["predictions", "label"]).unwrap(),
            Columns {
                prediction: 0,
                label: 1
            }
        );
    }

    #[test]
    fn header_without_labels() {
        let err = parse_header(&["predictions", "score"]).unwrap_err();
        assert_eq!(err, EvalError::MissingColumn("labels"));
    }
}
