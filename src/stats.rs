//! Statistics tracking for an evaluation run
//!
//! This module provides a structure for recording what the aggregator saw
//! while scoring, such as how many files it walked and which annotations it
//! skipped.

use serde::{Deserialize, Serialize};

/// Statistics collected during an evaluation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Number of ground-truth files scored
    pub files_evaluated: usize,

    /// Number of ground-truth files with no prediction file
    pub files_missing_predictions: usize,

    /// Number of prediction files with no ground-truth file
    pub orphan_prediction_files: usize,

    /// Number of orphan prediction files that were scored anyway
    pub orphan_prediction_files_scored: usize,

    /// Ground-truth annotations whose tag is outside the class set
    pub ignored_truth_annotations: usize,

    /// Prediction annotations whose tag is outside the class set
    pub ignored_prediction_annotations: usize,
}

impl EvaluationStats {
    /// Create a new `EvaluationStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ground-truth file being scored
    pub fn add_file(&mut self, has_predictions: bool) {
        self.files_evaluated += 1;
        if !has_predictions {
            self.files_missing_predictions += 1;
        }
    }

    /// Record a prediction file that has no ground-truth counterpart
    pub fn add_orphan(&mut self, scored: bool) {
        self.orphan_prediction_files += 1;
        if scored {
            self.orphan_prediction_files_scored += 1;
        }
    }

    /// Record ground-truth annotations skipped for an unknown tag
    pub fn skip_truths(&mut self, count: usize) {
        self.ignored_truth_annotations += count;
    }

    /// Record prediction annotations skipped for an unknown tag
    pub fn skip_predictions(&mut self, count: usize) {
        self.ignored_prediction_annotations += count;
    }

    /// Total number of annotations that were ignored
    pub fn total_ignored(&self) -> usize {
        self.ignored_truth_annotations + self.ignored_prediction_annotations
    }

    /// Get a summary string of the statistics
    pub fn summary(&self) -> String {
        format!(
            "Evaluation Statistics:\n\
             - Files evaluated: {}\n\
             - Files without predictions: {}\n\
             - Orphan prediction files: {} ({} scored)\n\
             - Ignored ground-truth annotations: {}\n\
             - Ignored prediction annotations: {}",
            self.files_evaluated,
            self.files_missing_predictions,
            self.orphan_prediction_files,
            self.orphan_prediction_files_scored,
            self.ignored_truth_annotations,
            self.ignored_prediction_annotations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats() {
        let stats = EvaluationStats::new();
        assert_eq!(stats.files_evaluated, 0);
        assert_eq!(stats.total_ignored(), 0);
    }

    #[test]
    fn test_file_counters() {
        let mut stats = EvaluationStats::new();
        stats.add_file(true);
        stats.add_file(false);
        stats.add_orphan(false);
        stats.add_orphan(true);

        assert_eq!(stats.files_evaluated, 2);
        assert_eq!(stats.files_missing_predictions, 1);
        assert_eq!(stats.orphan_prediction_files, 2);
        assert_eq!(stats.orphan_prediction_files_scored, 1);
    }

    #[test]
    fn test_ignored_counters() {
        let mut stats = EvaluationStats::new();
        stats.skip_truths(3);
        stats.skip_predictions(2);
        assert_eq!(stats.total_ignored(), 5);
        assert!(stats.summary().contains("Ignored prediction annotations: 2"));
    }
}
