use std::io::Write;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{CurvePoint, CurveReport, InputSummary, OptimumReport, PerformanceReportV1};

pub fn build_report(ctx: &Ctx) -> Result<PerformanceReportV1> {
    let dataset = ctx.dataset.as_ref().context("dataset missing")?;
    let sweep = ctx.sweep.as_ref().context("sweep missing")?;
    let curve = ctx.curve.as_ref().context("curve missing")?;

    let input = InputSummary {
        source: Some(ctx.source_name()),
        samples: dataset.len() as u64,
        positives: sweep.n_pos() as u64,
        negatives: sweep.n_neg() as u64,
        thresholds: sweep.len() as u64,
    };

    let points = sweep
        .rows()
        .zip(curve.x.iter().zip(curve.y.iter()))
        .map(|(row, (&x, &y))| CurvePoint {
            threshold: row.threshold,
            x,
            y,
            tp: row.tp as u64,
            fp: row.fp as u64,
            tn: row.tn as u64,
            fn_: row.fn_ as u64,
        })
        .collect();
    let (x_name, y_name) = curve.kind.axis_names();
    let curve_report = CurveReport {
        kind: curve.kind,
        x_name: x_name.to_string(),
        y_name: y_name.to_string(),
        normalized_precision: ctx.options.normalize_precision,
        points,
    };

    let optimum = ctx.optimum.map(|p| OptimumReport {
        index: p.index as u64,
        threshold: p.threshold,
        x: p.x,
        y: p.y,
    });

    let mut report = ctx.report.clone();
    report.input = input;
    report.auc = ctx.auc;
    report.optimum = optimum;
    report.curve = Some(curve_report);
    Ok(report)
}

pub fn write_report<W: Write>(w: &mut W, report: &PerformanceReportV1) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
