//! Core data types for UI-element annotations and evaluation results.

use crate::error::{EvalError, Result};
use crate::stats::EvaluationStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents an axis-aligned bounding box (x, y, width, height).
///
/// Coordinates are in LTWH (Left-Top-Width-Height) format where:
/// - x: Left coordinate
/// - y: Top coordinate
/// - width: Box width
/// - height: Box height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get the right coordinate (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom coordinate (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check that every field is finite and both dimensions are non-negative.
    ///
    /// Zero-area boxes are valid; they simply never reach an IoU above zero.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Like [`BoundingBox::is_valid`], but returns a descriptive error.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }

        Err(EvalError::InvalidBoundingBox(format!(
            "x={}, y={}, width={}, height={} (coordinates must be finite, dimensions non-negative)",
            self.x, self.y, self.width, self.height
        )))
    }
}

/// A single labelled box, as stored in an annotation file.
///
/// The box fields sit next to the tag on disk:
/// `{"tag": "Button", "x": 0, "y": 0, "width": 10, "height": 10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub tag: String,
    #[serde(flatten)]
    pub bbox: BoundingBox,
}

impl Annotation {
    /// Create a new annotation.
    pub fn new(tag: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            tag: tag.into(),
            bbox,
        }
    }
}

/// Contents of one annotation file.
///
/// A missing or `null` `annotations` key both mean the file has no boxes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationFile {
    #[serde(default)]
    pub annotations: Option<Vec<Annotation>>,
}

impl AnnotationFile {
    /// Take the annotations, treating an absent list as empty.
    pub fn into_annotations(self) -> Vec<Annotation> {
        self.annotations.unwrap_or_default()
    }
}

/// Annotations of a whole run, keyed by file name.
///
/// A `BTreeMap` keeps iteration order stable across runs.
pub type FileAnnotations = BTreeMap<String, Vec<Annotation>>;

/// Outcome of matching one class in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Precision, recall and F1 for one class, with the totals they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub class: String,
    /// Number of ground-truth boxes of this class across all scored files
    pub ground_truths: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Unweighted mean of the per-class metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Everything an evaluation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Per-class metrics, in class-set order
    pub per_class: Vec<ClassMetrics>,
    pub macro_avg: MacroMetrics,
    pub iou_threshold: f64,
    pub stats: EvaluationStats,
}

impl EvaluationReport {
    /// Look up the metrics of a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassMetrics> {
        self.per_class.iter().find(|m| m.class == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let bbox = BoundingBox::new(2.0, 3.0, 10.0, 20.0);
        assert_eq!(bbox.right(), 12.0);
        assert_eq!(bbox.bottom(), 23.0);
        assert_eq!(bbox.area(), 200.0);
    }

    #[test]
    fn test_zero_area_is_valid() {
        assert!(BoundingBox::new(5.0, 5.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_negative_or_nan_is_invalid() {
        assert!(!BoundingBox::new(0.0, 0.0, -1.0, 5.0).is_valid());
        assert!(!BoundingBox::new(0.0, 0.0, 5.0, -0.5).is_valid());
        assert!(!BoundingBox::new(f64::NAN, 0.0, 5.0, 5.0).is_valid());
        assert!(!BoundingBox::new(0.0, f64::INFINITY, 5.0, 5.0).is_valid());
        assert!(matches!(
            BoundingBox::new(0.0, 0.0, -1.0, 5.0).validate(),
            Err(EvalError::InvalidBoundingBox(_))
        ));
    }

    #[test]
    fn test_annotation_flattened_json() {
        let json = r#"{"tag": "Button", "x": 1, "y": 2.5, "width": 10, "height": 4}"#;
        let ann: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(ann.tag, "Button");
        assert_eq!(ann.bbox, BoundingBox::new(1.0, 2.5, 10.0, 4.0));
    }

    #[test]
    fn test_missing_annotations_key_is_empty() {
        let file: AnnotationFile = serde_json::from_str("{}").unwrap();
        assert!(file.into_annotations().is_empty());
    }

    #[test]
    fn test_null_annotations_is_empty() {
        let file: AnnotationFile = serde_json::from_str(r#"{"annotations": null}"#).unwrap();
        assert!(file.into_annotations().is_empty());
    }
}
