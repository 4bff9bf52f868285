pub mod curves;
pub mod dataset;
pub mod sweep;

pub use curves::{Curve, CurveKind, normalize_precision, precision_recall, roc, specificity};
pub use dataset::Dataset;
pub use sweep::{ConfusionRow, PerformanceSweep, build_sweep};
