use std::io::Write;

use anyhow::{Result, bail};

use crate::math::OptimalPoint;
use crate::perf::Curve;

/// Writes one `x y [threshold]` row per sweep entry.
pub fn write_curve_table<W: Write>(
    w: &mut W,
    curve: &Curve,
    thresholds: Option<&[f64]>,
    header: bool,
) -> Result<()> {
    let (x_name, y_name) = curve.kind.axis_names();
    ensure_len(curve.y.len(), curve.len(), y_name)?;

    match thresholds {
        Some(thresholds) => {
            ensure_len(thresholds.len(), curve.len(), "threshold")?;
            if header {
                writeln!(w, "{} {} threshold", x_name, y_name)?;
            }
            for i in 0..curve.len() {
                writeln!(
                    w,
                    "{:.6} {:.6} {:.6}",
                    curve.x[i], curve.y[i], thresholds[i]
                )?;
            }
        }
        None => {
            if header {
                writeln!(w, "{} {}", x_name, y_name)?;
            }
            for i in 0..curve.len() {
                writeln!(w, "{:.6} {:.6}", curve.x[i], curve.y[i])?;
            }
        }
    }
    Ok(())
}

pub fn write_auc<W: Write>(w: &mut W, area: f64) -> Result<()> {
    writeln!(w, "{}", area)?;
    Ok(())
}

/// Writes the optimum as `x y threshold`, or `x_name=x y_name=y threshold=t` with a header.
pub fn write_optimum<W: Write>(
    w: &mut W,
    names: (&str, &str),
    point: &OptimalPoint,
    header: bool,
) -> Result<()> {
    if header {
        writeln!(
            w,
            "{}={:.6} {}={:.6} threshold={:.6}",
            names.0, point.x, names.1, point.y, point.threshold
        )?;
    } else {
        writeln!(w, "{:.6} {:.6} {:.6}", point.x, point.y, point.threshold)?;
    }
    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
