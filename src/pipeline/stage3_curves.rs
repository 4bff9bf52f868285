use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::math::{OptimalPoint, auc, optimum};
use crate::perf::{Curve, CurveKind, specificity};
use crate::pipeline::Stage;

pub struct Stage3Curves;

impl Stage3Curves {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Curves {
    fn name(&self) -> &'static str {
        "stage3_curves"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sweep = ctx
            .sweep
            .as_ref()
            .context("sweep not computed before Stage 3")?;
        let thresholds = sweep.thresholds();

        let curve = match ctx.target.curve_kind() {
            CurveKind::PrecisionRecall => {
                Curve::precision_recall(sweep, ctx.options.normalize_precision)
            }
            CurveKind::Roc => Curve::roc(sweep),
        };

        let area = auc(&curve.x, &curve.y);
        let index = match curve.kind {
            CurveKind::PrecisionRecall => optimum(thresholds, &curve.x, &curve.y),
            // maximize specificity * sensitivity
            CurveKind::Roc => optimum(thresholds, &specificity(&curve.x), &curve.y),
        };
        let point = OptimalPoint::at(index, thresholds, &curve.x, &curve.y);

        debug!(index, threshold = point.threshold, "optimum selected");
        info!(kind = ?curve.kind, auc = area, "curves_ready");

        ctx.curve = Some(curve);
        ctx.auc = Some(area);
        ctx.optimum = Some(point);
        Ok(())
    }
}
