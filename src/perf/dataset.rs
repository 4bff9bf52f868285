use crate::error::{EvalError, Result};

/// Scores and 0/1 ground-truth labels for N samples, validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    scores: Vec<f64>,
    labels: Vec<u8>,
}

impl Dataset {
    pub fn new(scores: Vec<f64>, labels: &[i64]) -> Result<Self> {
        if scores.len() != labels.len() {
            return Err(EvalError::LengthMismatch {
                scores: scores.len(),
                labels: labels.len(),
            });
        }
        if scores.is_empty() {
            return Err(EvalError::EmptyDataset);
        }
        if let Some((index, &score)) = scores.iter().enumerate().find(|(_, s)| s.is_nan()) {
            return Err(EvalError::NonFiniteScore { index, score });
        }
        let labels = labels
            .iter()
            .enumerate()
            .map(|(index, &label)| match label {
                0 => Ok(0u8),
                1 => Ok(1u8),
                _ => Err(EvalError::InvalidLabel { index, label }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { scores, labels })
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        let (scores, labels): (Vec<f64>, Vec<i64>) = pairs.into_iter().unzip();
        Self::new(scores, &labels)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn n_pos(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    pub fn n_neg(&self) -> usize {
        self.len() - self.n_pos()
    }
}
