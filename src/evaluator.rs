//! Main evaluation orchestrator: per-class counts, class metrics and macro averages.

use crate::config::{EvaluationConfig, OrphanPolicy};
use crate::error::Result;
use crate::matching::match_class;
use crate::metrics::f1_score::calculate_f1_from_pr;
use crate::metrics::precision_recall::precision_recall_from_counts;
use crate::stats::EvaluationStats;
use crate::types::{
    Annotation, ClassMetrics, EvaluationReport, FileAnnotations, MacroMetrics, MatchResult,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Evaluate predictions against ground truth for every configured class.
///
/// **Independent per-class evaluation**: each class is matched file by file
/// and its counts are summed before any metric is derived. Only files present
/// in the ground truth are scored; a missing prediction file counts as an
/// empty prediction list. Prediction files without ground truth are handled
/// according to `config.orphan_predictions`.
///
/// # Arguments
///
/// * `ground_truth` - Ground-truth annotations keyed by file name
/// * `predictions` - Predicted annotations keyed by file name
/// * `config` - Class set, IoU threshold and orphan-file policy
///
/// # Returns
///
/// Returns an `EvaluationReport` with per-class metrics in class-set order
/// and their unweighted macro average.
///
/// # Errors
///
/// Fails if the config is invalid or any box of an evaluated class is
/// malformed.
///
/// # Example
///
/// ```
/// use ui_detect_eval::config::EvaluationConfig;
/// use ui_detect_eval::evaluator::evaluate;
/// use ui_detect_eval::types::{Annotation, BoundingBox, FileAnnotations};
///
/// let mut truth = FileAnnotations::new();
/// truth.insert(
///     "login.json".to_string(),
///     vec![Annotation::new("Button", BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
/// );
/// let preds = truth.clone();
///
/// let report = evaluate(&truth, &preds, &EvaluationConfig::with_classes(["Button"])).unwrap();
/// assert_eq!(report.macro_avg.f1, 1.0);
/// ```
pub fn evaluate(
    ground_truth: &FileAnnotations,
    predictions: &FileAnnotations,
    config: &EvaluationConfig,
) -> Result<EvaluationReport> {
    config.validate()?;

    let known: HashSet<&str> = config.classes.iter().map(String::as_str).collect();
    let stats = collect_stats(ground_truth, predictions, config, &known);

    let orphans: Vec<&[Annotation]> = match config.orphan_predictions {
        OrphanPolicy::Ignore => Vec::new(),
        OrphanPolicy::CountAsFalsePositives => predictions
            .iter()
            .filter(|(file, _)| !ground_truth.contains_key(*file))
            .map(|(_, anns)| anns.as_slice())
            .collect(),
    };

    let mut per_class = Vec::with_capacity(config.classes.len());

    for class in &config.classes {
        let mut totals = MatchResult::default();

        for (file, truths) in ground_truth {
            let preds = predictions.get(file).map_or(&[][..], Vec::as_slice);
            let counts = match_class(preds, truths, class, config.iou_threshold)?;
            accumulate(&mut totals, &counts);
        }

        for preds in &orphans {
            let counts = match_class(preds, &[], class, config.iou_threshold)?;
            accumulate(&mut totals, &counts);
        }

        let metrics = class_metrics(class, &totals);
        debug!(
            class = %class,
            tp = totals.true_positives,
            fp = totals.false_positives,
            fn_ = totals.false_negatives,
            precision = metrics.precision,
            recall = metrics.recall,
            f1 = metrics.f1,
            "Scored class"
        );
        per_class.push(metrics);
    }

    let macro_avg = macro_average(&per_class);

    info!(
        classes = per_class.len(),
        files = stats.files_evaluated,
        orphan_files = stats.orphan_prediction_files,
        ignored_annotations = stats.total_ignored(),
        macro_f1 = macro_avg.f1,
        "Evaluation complete"
    );

    Ok(EvaluationReport {
        per_class,
        macro_avg,
        iou_threshold: config.iou_threshold,
        stats,
    })
}

/// Derive precision, recall and F1 from a class's accumulated counts.
///
/// The ground-truth count is `TP + FN`, since every truth box is either
/// claimed or missed.
pub fn class_metrics(class: &str, totals: &MatchResult) -> ClassMetrics {
    let pr = precision_recall_from_counts(totals);
    let f1 = calculate_f1_from_pr(&pr);

    ClassMetrics {
        class: class.to_string(),
        ground_truths: pr.true_positives + pr.false_negatives,
        true_positives: pr.true_positives,
        false_positives: pr.false_positives,
        false_negatives: pr.false_negatives,
        precision: pr.precision,
        recall: pr.recall,
        f1,
    }
}

/// Unweighted mean of each metric across classes.
///
/// Every class counts once, however many boxes it has. An empty slice
/// averages to zero.
pub fn macro_average(per_class: &[ClassMetrics]) -> MacroMetrics {
    if per_class.is_empty() {
        return MacroMetrics::default();
    }

    let n = per_class.len() as f64;
    MacroMetrics {
        precision: per_class.iter().map(|m| m.precision).sum::<f64>() / n,
        recall: per_class.iter().map(|m| m.recall).sum::<f64>() / n,
        f1: per_class.iter().map(|m| m.f1).sum::<f64>() / n,
    }
}

fn accumulate(totals: &mut MatchResult, counts: &MatchResult) {
    totals.true_positives += counts.true_positives;
    totals.false_positives += counts.false_positives;
    totals.false_negatives += counts.false_negatives;
}

fn collect_stats(
    ground_truth: &FileAnnotations,
    predictions: &FileAnnotations,
    config: &EvaluationConfig,
    known: &HashSet<&str>,
) -> EvaluationStats {
    let unknown = |anns: &[Annotation]| {
        anns.iter()
            .filter(|ann| !known.contains(ann.tag.as_str()))
            .count()
    };

    let mut stats = EvaluationStats::new();

    for (file, truths) in ground_truth {
        let preds = predictions.get(file);
        stats.add_file(preds.is_some());
        stats.skip_truths(unknown(truths));
        if let Some(preds) = preds {
            stats.skip_predictions(unknown(preds));
        }
    }

    let score_orphans = config.orphan_predictions == OrphanPolicy::CountAsFalsePositives;
    for (file, preds) in predictions {
        if ground_truth.contains_key(file) {
            continue;
        }
        debug!(file = %file, scored = score_orphans, "Prediction file has no ground truth");
        stats.add_orphan(score_orphans);
        if score_orphans {
            stats.skip_predictions(unknown(preds));
        }
    }

    stats
}
