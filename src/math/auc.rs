//! Trapezoidal integration of curves given in sweep order.

/// Area under the polyline through `(x[i], y[i])`.
///
/// Segment widths are taken as `|x[i] - x[i-1]|`, so the points may be traversed with x
/// increasing or decreasing. Panics if `x` and `y` differ in length.
pub fn auc(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "auc: x and y must have the same length");
    let mut area = 0.0;
    for i in 1..x.len() {
        let dx = (x[i] - x[i - 1]).abs();
        let dy = (y[i] + y[i - 1]) / 2.0;
        area += dx * dy;
    }
    area
}
