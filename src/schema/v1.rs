use serde::{Deserialize, Serialize};

use crate::perf::CurveKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    PrecisionRecall,
    PrecisionRecallAuc,
    Roc,
    RocAuc,
    OptimalPrecisionRecall,
    OptimalRoc,
}

impl Target {
    pub fn curve_kind(self) -> CurveKind {
        match self {
            Target::PrecisionRecall
            | Target::PrecisionRecallAuc
            | Target::OptimalPrecisionRecall => CurveKind::PrecisionRecall,
            Target::Roc | Target::RocAuc | Target::OptimalRoc => CurveKind::Roc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::PrecisionRecall => "precision-recall",
            Target::PrecisionRecallAuc => "precision-recall-auc",
            Target::Roc => "roc",
            Target::RocAuc => "roc-auc",
            Target::OptimalPrecisionRecall => "optimal-precision-recall",
            Target::OptimalRoc => "optimal-roc",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSummary {
    pub source: Option<String>,
    pub samples: u64,
    pub positives: u64,
    pub negatives: u64,
    pub thresholds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePoint {
    pub threshold: f64,
    pub x: f64,
    pub y: f64,
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveReport {
    pub kind: CurveKind,
    pub x_name: String,
    pub y_name: String,
    pub normalized_precision: bool,
    pub points: Vec<CurvePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimumReport {
    pub index: u64,
    pub threshold: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReportV1 {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub target: Target,
    pub input: InputSummary,
    pub auc: Option<f64>,
    pub optimum: Option<OptimumReport>,
    pub curve: Option<CurveReport>,
}

impl PerformanceReportV1 {
    pub fn empty(tool_version: &str, target: Target) -> Self {
        Self {
            schema_version: 1,
            tool: ToolInfo {
                name: "classifier-performance".to_string(),
                version: tool_version.to_string(),
            },
            target,
            input: InputSummary {
                source: None,
                samples: 0,
                positives: 0,
                negatives: 0,
                thresholds: 0,
            },
            auc: None,
            optimum: None,
            curve: None,
        }
    }
}
