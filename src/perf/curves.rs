use serde::{Deserialize, Serialize};

use crate::perf::sweep::PerformanceSweep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    PrecisionRecall,
    Roc,
}

impl CurveKind {
    /// Column names of the x and y coordinates.
    pub fn axis_names(self) -> (&'static str, &'static str) {
        match self {
            CurveKind::PrecisionRecall => ("recall", "precision"),
            CurveKind::Roc => ("FPR", "TPR"),
        }
    }
}

/// A curve aligned index-by-index with the sweep it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn precision_recall(sweep: &PerformanceSweep, normalize: bool) -> Self {
        let (recall, precision) = precision_recall(sweep, normalize);
        Self {
            kind: CurveKind::PrecisionRecall,
            x: recall,
            y: precision,
        }
    }

    pub fn roc(sweep: &PerformanceSweep) -> Self {
        let (fpr, tpr) = roc(sweep);
        Self {
            kind: CurveKind::Roc,
            x: fpr,
            y: tpr,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Recall and precision along the sweep, returned as `(recall, precision)`.
///
/// Where nothing is predicted positive precision keeps the previous entry (0 at the
/// first index). With `normalize`, precision is rescaled by the base rate
/// `c = P/(P+N)` to `(precision - c)/(1 - c)`.
pub fn precision_recall(sweep: &PerformanceSweep, normalize: bool) -> (Vec<f64>, Vec<f64>) {
    let n = sweep.len();
    let tp = sweep.tp();
    let fp = sweep.fp();
    let fn_ = sweep.fn_();

    let mut recall = vec![0.0; n];
    let mut precision = vec![0.0; n];
    for i in 0..n {
        if tp[i] > 0 {
            recall[i] = tp[i] as f64 / (tp[i] + fn_[i]) as f64;
            precision[i] = tp[i] as f64 / (tp[i] + fp[i]) as f64;
        } else if i > 0 {
            precision[i] = precision[i - 1];
        }
    }

    if normalize {
        let c = sweep.n_pos() as f64 / (sweep.n_pos() + sweep.n_neg()) as f64;
        for p in precision.iter_mut() {
            *p = normalize_precision(*p, c);
        }
    }
    (recall, precision)
}

pub fn normalize_precision(precision: f64, base_rate: f64) -> f64 {
    (precision - base_rate) / (1.0 - base_rate)
}

/// ROC coordinates, returned as `(fpr, tpr)`.
///
/// Single-class datasets divide by zero and yield NaN/Inf entries.
pub fn roc(sweep: &PerformanceSweep) -> (Vec<f64>, Vec<f64>) {
    let n_pos = sweep.n_pos() as f64;
    let n_neg = sweep.n_neg() as f64;
    let fpr = sweep.fp().iter().map(|&fp| fp as f64 / n_neg).collect();
    let tpr = sweep.tp().iter().map(|&tp| tp as f64 / n_pos).collect();
    (fpr, tpr)
}

/// `1 - FPR` for each entry, the x coordinate maximized for the ROC optimum.
pub fn specificity(fpr: &[f64]) -> Vec<f64> {
    fpr.iter().map(|&f| 1.0 - f).collect()
}
