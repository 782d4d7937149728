//! Detection matching utilities for evaluating predictions against ground truth.

use crate::error::Result;
use crate::metrics::iou::calculate_iou;
use crate::types::{Annotation, BoundingBox, MatchResult};

/// IoU a prediction needs to claim a ground-truth box.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// Greedily assign each prediction to a ground-truth box.
///
/// Predictions are visited in the order given. Each one scans the ground
/// truth, also in order, and claims the first unclaimed box whose IoU is at
/// least `iou_threshold`. This is first fit, not best fit: the result depends
/// on input order and may find fewer matches than an optimal assignment.
///
/// # Returns
///
/// One entry per prediction: the index of the claimed ground-truth box, or
/// `None` for a false positive.
pub fn greedy_assignments(
    predictions: &[BoundingBox],
    ground_truths: &[BoundingBox],
    iou_threshold: f64,
) -> Vec<Option<usize>> {
    let mut claimed = vec![false; ground_truths.len()];

    predictions
        .iter()
        .map(|pred| {
            let gt_idx = ground_truths
                .iter()
                .enumerate()
                .position(|(gt_idx, gt)| {
                    !claimed[gt_idx] && calculate_iou(pred, gt) >= iou_threshold
                })?;
            claimed[gt_idx] = true;
            Some(gt_idx)
        })
        .collect()
}

/// Match predictions to ground truth for a single file and class.
///
/// # Example
///
/// ```
/// use ui_detect_eval::matching::{match_boxes, DEFAULT_IOU_THRESHOLD};
/// use ui_detect_eval::types::BoundingBox;
///
/// let truths = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
/// let preds = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
///     BoundingBox::new(1.0, 1.0, 10.0, 10.0),
/// ];
/// let result = match_boxes(&preds, &truths, DEFAULT_IOU_THRESHOLD);
/// assert_eq!(result.true_positives, 1);
/// assert_eq!(result.false_positives, 1);
/// assert_eq!(result.false_negatives, 0);
/// ```
pub fn match_boxes(
    predictions: &[BoundingBox],
    ground_truths: &[BoundingBox],
    iou_threshold: f64,
) -> MatchResult {
    let true_positives = greedy_assignments(predictions, ground_truths, iou_threshold)
        .iter()
        .filter(|assignment| assignment.is_some())
        .count();

    MatchResult {
        true_positives,
        false_positives: predictions.len() - true_positives,
        false_negatives: ground_truths.len() - true_positives,
    }
}

/// Collect the boxes of annotations carrying `tag`, keeping their order.
pub fn boxes_with_tag(annotations: &[Annotation], tag: &str) -> Vec<BoundingBox> {
    annotations
        .iter()
        .filter(|ann| ann.tag == tag)
        .map(|ann| ann.bbox)
        .collect()
}

/// Match one class of annotated predictions against annotated ground truth.
///
/// Annotations with other tags are ignored. Every kept box is validated
/// first, so malformed geometry fails here instead of skewing the counts.
///
/// # Errors
///
/// Returns `InvalidBoundingBox` if any box of this class has a negative
/// dimension or a non-finite coordinate.
pub fn match_class(
    predictions: &[Annotation],
    ground_truths: &[Annotation],
    tag: &str,
    iou_threshold: f64,
) -> Result<MatchResult> {
    let pred_boxes = boxes_with_tag(predictions, tag);
    let gt_boxes = boxes_with_tag(ground_truths, tag);

    for bbox in pred_boxes.iter().chain(gt_boxes.iter()) {
        bbox.validate()?;
    }

    Ok(match_boxes(&pred_boxes, &gt_boxes, iou_threshold))
}
