use std::path::PathBuf;

use crate::math::OptimalPoint;
use crate::perf::{Curve, Dataset, PerformanceSweep};
use crate::schema::v1::{PerformanceReportV1, Target};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub normalize_precision: bool,
    pub print_header: bool,
    pub print_thresholds: bool,
    pub json: bool,
}

/// State shared by the pipeline stages of one evaluation.
#[derive(Debug)]
pub struct Ctx {
    pub input: Option<PathBuf>,
    pub target: Target,
    pub options: OutputOptions,
    pub dataset: Option<Dataset>,
    pub sweep: Option<PerformanceSweep>,
    pub curve: Option<Curve>,
    pub auc: Option<f64>,
    pub optimum: Option<OptimalPoint>,
    pub warnings: Vec<String>,
    pub report: PerformanceReportV1,
}

impl Ctx {
    pub fn new(
        input: Option<PathBuf>,
        target: Target,
        options: OutputOptions,
        tool_version: &str,
    ) -> Self {
        Self {
            input,
            target,
            options,
            dataset: None,
            sweep: None,
            curve: None,
            auc: None,
            optimum: None,
            warnings: Vec::new(),
            report: PerformanceReportV1::empty(tool_version, target),
        }
    }

    /// Human-readable name of the predictions source.
    pub fn source_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}
