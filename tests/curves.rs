use classifier_performance::perf::{
    Curve, CurveKind, build_sweep, normalize_precision, precision_recall, roc, specificity,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn precision_recall_separable() {
    let sweep = build_sweep(&[0.1, 0.2, 0.3, 0.4], &[0, 0, 1, 1]).unwrap();
    let (recall, precision) = precision_recall(&sweep, false);
    assert_eq!(recall, vec![1.0, 1.0, 0.5, 0.0]);
    assert!(close(precision[0], 2.0 / 3.0));
    assert_eq!(&precision[1..], &[1.0, 1.0, 1.0]);
}

#[test]
fn precision_carries_forward_when_nothing_predicted() {
    let sweep = build_sweep(&[0.1, 0.2, 0.3, 0.4], &[1, 0, 1, 0]).unwrap();
    let (recall, precision) = precision_recall(&sweep, false);
    assert_eq!(sweep.tp(), &[1, 1, 0, 0]);
    assert_eq!(recall, vec![0.5, 0.5, 0.0, 0.0]);
    assert!(close(precision[0], 1.0 / 3.0));
    assert_eq!(&precision[1..], &[0.5, 0.5, 0.5]);
}

#[test]
fn precision_zero_at_first_index_without_positives() {
    let sweep = build_sweep(&[0.5, 0.5], &[1, 0]).unwrap();
    let (recall, precision) = precision_recall(&sweep, false);
    assert_eq!(recall, vec![0.0]);
    assert_eq!(precision, vec![0.0]);
}

#[test]
fn normalized_precision_balanced_half_is_zero() {
    let sweep = build_sweep(&[0.1, 0.2, 0.3, 0.4], &[1, 0, 1, 0]).unwrap();
    let (_, precision) = precision_recall(&sweep, true);
    assert_eq!(precision[1], 0.0);
    assert!(precision[0] < 0.0);
    assert_eq!(normalize_precision(0.5, 0.5), 0.0);
    assert_eq!(normalize_precision(1.0, 0.25), 1.0);
}

#[test]
fn roc_rates() {
    let sweep = build_sweep(&[0.1, 0.2, 0.3, 0.4], &[0, 0, 1, 1]).unwrap();
    let (fpr, tpr) = roc(&sweep);
    assert_eq!(fpr, vec![0.5, 0.0, 0.0, 0.0]);
    assert_eq!(tpr, vec![1.0, 1.0, 0.5, 0.0]);
    assert_eq!(specificity(&fpr), vec![0.5, 1.0, 1.0, 1.0]);
}

#[test]
fn roc_single_class_propagates_nan() {
    let sweep = build_sweep(&[0.1, 0.2], &[1, 1]).unwrap();
    let (fpr, tpr) = roc(&sweep);
    assert!(fpr.iter().all(|v| v.is_nan()));
    assert_eq!(tpr, vec![0.5, 0.0]);
}

#[test]
fn curve_wrappers_keep_axis_order() {
    let sweep = build_sweep(&[0.1, 0.2, 0.3], &[0, 1, 1]).unwrap();
    let pr = Curve::precision_recall(&sweep, false);
    assert_eq!(pr.kind, CurveKind::PrecisionRecall);
    assert_eq!(pr.kind.axis_names(), ("recall", "precision"));
    assert_eq!(pr.x, precision_recall(&sweep, false).0);

    let rc = Curve::roc(&sweep);
    assert_eq!(rc.kind.axis_names(), ("FPR", "TPR"));
    assert_eq!(rc.x, roc(&sweep).0);
    assert_eq!(rc.len(), sweep.len());
}
