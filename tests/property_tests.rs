//! Property-based tests using proptest
//!
//! These tests verify mathematical properties and invariants that should
//! always hold regardless of the input values.

use proptest::prelude::*;
use ui_detect_eval::config::EvaluationConfig;
use ui_detect_eval::evaluator::evaluate;
use ui_detect_eval::matching::{greedy_assignments, match_boxes, DEFAULT_IOU_THRESHOLD};
use ui_detect_eval::metrics::{calculate_f1_score, calculate_iou, calculate_precision, calculate_recall};
use ui_detect_eval::types::{Annotation, BoundingBox, FileAnnotations};

fn arb_box() -> impl Strategy<Value = BoundingBox> {
    (0.0f64..100.0, 0.0f64..100.0, 0.0f64..50.0, 0.0f64..50.0)
        .prop_map(|(x, y, w, h)| BoundingBox::new(x, y, w, h))
}

fn arb_positive_box() -> impl Strategy<Value = BoundingBox> {
    (0.0f64..100.0, 0.0f64..100.0, 1.0f64..50.0, 1.0f64..50.0)
        .prop_map(|(x, y, w, h)| BoundingBox::new(x, y, w, h))
}

fn arb_annotation() -> impl Strategy<Value = Annotation> {
    (prop::sample::select(vec!["Button", "Input", "Radio", "Dropdown", "Slider"]), arb_box())
        .prop_map(|(tag, bbox)| Annotation::new(tag, bbox))
}

// Property: IoU is symmetric and bounded
proptest! {
    #[test]
    fn prop_iou_symmetric(a in arb_box(), b in arb_box()) {
        let iou1 = calculate_iou(&a, &b);
        let iou2 = calculate_iou(&b, &a);
        prop_assert!((iou1 - iou2).abs() < 1e-12,
                "IoU should be symmetric: {} vs {}", iou1, iou2);
    }

    #[test]
    fn prop_iou_range(a in arb_box(), b in arb_box()) {
        let iou = calculate_iou(&a, &b);
        prop_assert!(!iou.is_nan(), "IoU must never be NaN");
        prop_assert!((0.0..=1.0 + 1e-12).contains(&iou),
                "IoU should be in [0,1], got {}", iou);
    }

    #[test]
    fn prop_self_iou_is_one(a in arb_positive_box()) {
        let iou = calculate_iou(&a, &a);
        prop_assert!((iou - 1.0).abs() < 1e-10, "Self-IoU should be 1, got {}", iou);
    }

    #[test]
    fn prop_disjoint_boxes_zero(a in arb_positive_box(), gap in 0.0f64..20.0) {
        let b = BoundingBox::new(a.right() + gap, a.y, a.width, a.height);
        prop_assert_eq!(calculate_iou(&a, &b), 0.0);
    }
}

// Property: every prediction and every ground truth is accounted for once
proptest! {
    #[test]
    fn prop_match_conservation(
        preds in prop::collection::vec(arb_box(), 0..20),
        truths in prop::collection::vec(arb_box(), 0..20),
    ) {
        let result = match_boxes(&preds, &truths, DEFAULT_IOU_THRESHOLD);
        prop_assert_eq!(result.true_positives + result.false_positives, preds.len());
        prop_assert_eq!(result.true_positives + result.false_negatives, truths.len());
    }

    #[test]
    fn prop_each_truth_claimed_at_most_once(
        preds in prop::collection::vec(arb_box(), 0..20),
        truths in prop::collection::vec(arb_box(), 0..20),
    ) {
        let assignments = greedy_assignments(&preds, &truths, DEFAULT_IOU_THRESHOLD);
        let mut claimed: Vec<usize> = assignments.iter().flatten().copied().collect();
        let total = claimed.len();
        claimed.sort_unstable();
        claimed.dedup();
        prop_assert_eq!(claimed.len(), total);

        for (pred, assignment) in preds.iter().zip(&assignments) {
            if let Some(gt_idx) = assignment {
                prop_assert!(calculate_iou(pred, &truths[*gt_idx]) >= DEFAULT_IOU_THRESHOLD);
            }
        }
    }
}

// Property: derived scores stay in [0, 1]
proptest! {
    #[test]
    fn prop_scores_range(tp in 0usize..1000, fp in 0usize..1000, fn_ in 0usize..1000) {
        let precision = calculate_precision(tp, fp);
        let recall = calculate_recall(tp, fn_);
        let f1 = calculate_f1_score(precision, recall);
        for v in [precision, recall, f1] {
            prop_assert!((0.0..=1.0).contains(&v), "score out of range: {}", v);
        }
    }
}

// Property: macro metrics are the plain mean of class metrics, and runs repeat exactly
proptest! {
    #[test]
    fn prop_macro_is_mean_and_deterministic(
        truths in prop::collection::vec(arb_annotation(), 0..15),
        preds in prop::collection::vec(arb_annotation(), 0..15),
    ) {
        let mut truth_files = FileAnnotations::new();
        truth_files.insert("a.json".to_string(), truths);
        let mut pred_files = FileAnnotations::new();
        pred_files.insert("a.json".to_string(), preds);

        let config = EvaluationConfig::default();
        let report = evaluate(&truth_files, &pred_files, &config).unwrap();

        let n = report.per_class.len() as f64;
        let mean_p = report.per_class.iter().map(|m| m.precision).sum::<f64>() / n;
        let mean_r = report.per_class.iter().map(|m| m.recall).sum::<f64>() / n;
        let mean_f1 = report.per_class.iter().map(|m| m.f1).sum::<f64>() / n;
        prop_assert!((report.macro_avg.precision - mean_p).abs() < 1e-12);
        prop_assert!((report.macro_avg.recall - mean_r).abs() < 1e-12);
        prop_assert!((report.macro_avg.f1 - mean_f1).abs() < 1e-12);

        let again = evaluate(&truth_files, &pred_files, &config).unwrap();
        prop_assert_eq!(again, report);
    }
}
