//! Precision and Recall calculation.

use crate::types::MatchResult;

/// Container for precision and recall values.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Calculate precision and recall from TP, FP, and FN counts.
///
/// Both values are 0.0 when their denominator is zero, so a class with no
/// predictions or no ground truth scores 0 instead of NaN.
///
/// # Arguments
///
/// * `true_positives` - Number of true positive detections
/// * `false_positives` - Number of false positive detections
/// * `false_negatives` - Number of false negative (missed) detections
///
/// # Returns
///
/// Returns a `PrecisionRecall` struct containing precision and recall values.
///
/// # Example
///
/// ```
/// use ui_detect_eval::metrics::precision_recall::calculate_precision_recall;
///
/// let pr = calculate_precision_recall(8, 2, 3);
/// assert_eq!(pr.precision, 0.8); // 8 / (8 + 2)
/// assert!((pr.recall - 0.7272).abs() < 0.001); // 8 / (8 + 3)
/// ```
pub fn calculate_precision_recall(
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
) -> PrecisionRecall {
    PrecisionRecall {
        precision: calculate_precision(true_positives, false_positives),
        recall: calculate_recall(true_positives, false_negatives),
        true_positives,
        false_positives,
        false_negatives,
    }
}

/// Calculate precision and recall from accumulated match counts.
pub fn precision_recall_from_counts(counts: &MatchResult) -> PrecisionRecall {
    calculate_precision_recall(
        counts.true_positives,
        counts.false_positives,
        counts.false_negatives,
    )
}

/// `TP / (TP + FP)`, or 0.0 when nothing was predicted.
pub fn calculate_precision(true_positives: usize, false_positives: usize) -> f64 {
    if true_positives + false_positives > 0 {
        true_positives as f64 / (true_positives + false_positives) as f64
    } else {
        0.0
    }
}

/// `TP / (TP + FN)`, or 0.0 when there was nothing to find.
pub fn calculate_recall(true_positives: usize, false_negatives: usize) -> f64 {
    if true_positives + false_negatives > 0 {
        true_positives as f64 / (true_positives + false_negatives) as f64
    } else {
        0.0
    }
}
