use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::ctx::OutputOptions;
use crate::schema::v1::Target;

#[derive(Debug, Parser)]
#[command(
    name = "classifier-performance",
    version,
    about = "Precision-recall and ROC evaluation of binary classifier predictions"
)]
pub struct Cli {
    #[arg(value_enum, ignore_case = true, help = "Evaluation to compute")]
    pub target: TargetArg,

    #[arg(help = "Predictions table with `prediction' and `label' columns (stdin if omitted)")]
    pub predictions: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Normalize precision by the base rate of positives"
    )]
    pub normalize_precision: bool,

    #[arg(long, default_value_t = false, help = "Print header")]
    pub print_header: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Print additional column with thresholds"
    )]
    pub print_thresholds: bool,

    #[arg(long, default_value_t = false, help = "Print a JSON report instead of text")]
    pub json: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Verbose level [-v or -vv]")]
    pub verbose: u8,
}

impl Cli {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            normalize_precision: self.normalize_precision,
            print_header: self.print_header,
            print_thresholds: self.print_thresholds,
            json: self.json,
        }
    }

    /// Default log filter implied by the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    PrecisionRecall,
    PrecisionRecallAuc,
    Roc,
    RocAuc,
    OptimalPrecisionRecall,
    OptimalRoc,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::PrecisionRecall => Target::PrecisionRecall,
            TargetArg::PrecisionRecallAuc => Target::PrecisionRecallAuc,
            TargetArg::Roc => Target::Roc,
            TargetArg::RocAuc => Target::RocAuc,
            TargetArg::OptimalPrecisionRecall => Target::OptimalPrecisionRecall,
            TargetArg::OptimalRoc => Target::OptimalRoc,
        }
    }
}
