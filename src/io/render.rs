use std::io::Write;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::{json_writer, table_writer};
use crate::perf::CurveKind;
use crate::schema::v1::Target;

/// Writes the result selected by the context's target.
pub fn render<W: Write>(ctx: &Ctx, w: &mut W) -> Result<()> {
    if ctx.options.json {
        return json_writer::write_report(w, &ctx.report);
    }

    let curve = ctx.curve.as_ref().context("curve missing")?;
    let sweep = ctx.sweep.as_ref().context("sweep missing")?;

    match ctx.target {
        Target::PrecisionRecall | Target::Roc => {
            let thresholds = ctx.options.print_thresholds.then(|| sweep.thresholds());
            table_writer::write_curve_table(w, curve, thresholds, ctx.options.print_header)
        }
        Target::PrecisionRecallAuc | Target::RocAuc => {
            let area = ctx.auc.context("area under curve missing")?;
            table_writer::write_auc(w, area)
        }
        Target::OptimalPrecisionRecall | Target::OptimalRoc => {
            let point = ctx.optimum.as_ref().context("optimum missing")?;
            let names = match curve.kind {
                CurveKind::PrecisionRecall => ("recall", "precision"),
                CurveKind::Roc => ("fpr", "tpr"),
            };
            table_writer::write_optimum(w, names, point, ctx.options.print_header)
        }
    }
}
