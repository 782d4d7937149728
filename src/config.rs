//! Evaluation settings: the class taxonomy, IoU threshold and orphan-file policy.

use crate::error::{EvalError, Result};
use crate::matching::DEFAULT_IOU_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// UI-element classes scored when no other taxonomy is configured.
pub const DEFAULT_CLASSES: [&str; 4] = ["Button", "Input", "Radio", "Dropdown"];

/// What to do with a prediction file that has no ground-truth file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Leave the file out of scoring entirely.
    #[default]
    Ignore,
    /// Score the file against an empty ground truth, so every prediction of
    /// an evaluated class is a false positive.
    CountAsFalsePositives,
}

/// Settings for one evaluation run.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "classes": ["Button", "Checkbox"], "iou_threshold": 0.6 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Ordered class set; annotations with other tags are ignored
    pub classes: Vec<String>,
    /// Minimum IoU for a prediction to claim a ground-truth box
    pub iou_threshold: f64,
    pub orphan_predictions: OrphanPolicy,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES.iter().map(|c| c.to_string()).collect(),
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            orphan_predictions: OrphanPolicy::default(),
        }
    }
}

impl EvaluationConfig {
    /// Create a config for the given classes with default settings otherwise.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load and validate a config from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: EvaluationConfig = serde_json::from_reader(reader)?;

        config.validate()?;

        Ok(config)
    }

    /// Check the class set and threshold.
    ///
    /// # Errors
    ///
    /// - `EmptyClassSet` if no classes are configured
    /// - `InvalidConfig` for blank or duplicate class names
    /// - `InvalidThreshold` unless the threshold is finite and in (0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(EvalError::EmptyClassSet(
                "at least one class must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for class in &self.classes {
            if class.trim().is_empty() {
                return Err(EvalError::InvalidConfig(
                    "class names must not be blank".to_string(),
                ));
            }
            if !seen.insert(class.as_str()) {
                return Err(EvalError::InvalidConfig(format!(
                    "class '{}' is listed more than once",
                    class
                )));
            }
        }

        validate_iou_threshold(self.iou_threshold)
    }
}

/// Validate that an IoU threshold is finite and in (0, 1].
///
/// A threshold of zero would let disjoint boxes match, so it is rejected.
pub fn validate_iou_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(EvalError::InvalidThreshold(format!(
            "IoU threshold must be in (0, 1], got {}",
            threshold
        )));
    }
    Ok(())
}
