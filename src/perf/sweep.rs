//! Confusion-matrix sweep over every distinct score.
//!
//! Convention: at threshold `t` a sample is predicted positive iff its score is
//! strictly greater than `t`. Samples scoring exactly `t` count as predicted negative,
//! so the highest threshold always predicts nothing positive.

use crate::error::Result;
use crate::perf::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionRow {
    pub threshold: f64,
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSweep {
    thresholds: Vec<f64>,
    tp: Vec<usize>,
    fp: Vec<usize>,
    tn: Vec<usize>,
    fn_: Vec<usize>,
    n_pos: usize,
    n_neg: usize,
}

/// Validates raw slices into a [`Dataset`] and sweeps it.
pub fn build_sweep(scores: &[f64], labels: &[i64]) -> Result<PerformanceSweep> {
    let dataset = Dataset::new(scores.to_vec(), labels)?;
    Ok(PerformanceSweep::from_dataset(&dataset))
}

impl PerformanceSweep {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut samples: Vec<(f64, u8)> = dataset
            .scores()
            .iter()
            .copied()
            .zip(dataset.labels().iter().copied())
            .collect();
        samples.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        // cumulative counts after each run of equal scores
        let mut thresholds = Vec::new();
        let mut cum_pos = Vec::new();
        let mut cum_neg = Vec::new();
        let mut seen_pos = 0usize;
        let mut seen_neg = 0usize;
        let mut i = 0;
        while i < samples.len() {
            let value = samples[i].0;
            while i < samples.len() && samples[i].0 == value {
                if samples[i].1 == 1 {
                    seen_pos += 1;
                } else {
                    seen_neg += 1;
                }
                i += 1;
            }
            thresholds.push(value);
            cum_pos.push(seen_pos);
            cum_neg.push(seen_neg);
        }

        let n_pos = seen_pos;
        let n_neg = seen_neg;
        let tp = cum_pos.iter().map(|&cp| n_pos - cp).collect();
        let fp = cum_neg.iter().map(|&cn| n_neg - cn).collect();

        Self {
            thresholds,
            tp,
            fp,
            tn: cum_neg,
            fn_: cum_pos,
            n_pos,
            n_neg,
        }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn threshold(&self, i: usize) -> f64 {
        self.thresholds[i]
    }

    pub fn tp(&self) -> &[usize] {
        &self.tp
    }

    pub fn fp(&self) -> &[usize] {
        &self.fp
    }

    pub fn tn(&self) -> &[usize] {
        &self.tn
    }

    pub fn fn_(&self) -> &[usize] {
        &self.fn_
    }

    pub fn n_pos(&self) -> usize {
        self.n_pos
    }

    pub fn n_neg(&self) -> usize {
        self.n_neg
    }

    pub fn row(&self, i: usize) -> ConfusionRow {
        ConfusionRow {
            threshold: self.thresholds[i],
            tp: self.tp[i],
            fp: self.fp[i],
            tn: self.tn[i],
            fn_: self.fn_[i],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = ConfusionRow> + '_ {
        (0..self.len()).map(|i| self.row(i))
    }
}
