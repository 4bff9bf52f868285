/// Index maximizing `x[i] * y[i]`; ties go to the lowest index.
///
/// NaN products never replace the running best. Panics if the three slices differ in
/// length.
pub fn optimum(thresholds: &[f64], x: &[f64], y: &[f64]) -> usize {
    assert_eq!(thresholds.len(), x.len(), "optimum: thresholds and x differ in length");
    assert_eq!(x.len(), y.len(), "optimum: x and y differ in length");
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for i in 0..thresholds.len() {
        let value = x[i] * y[i];
        if value > best_value {
            best_value = value;
            best = i;
        }
    }
    best
}

/// Operating point read back from a sweep index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub threshold: f64,
}

impl OptimalPoint {
    pub fn at(index: usize, thresholds: &[f64], x: &[f64], y: &[f64]) -> Self {
        Self {
            index,
            x: x[index],
            y: y[index],
            threshold: thresholds[index],
        }
    }
}
