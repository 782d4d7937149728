//! # ui-detect-eval
//!
//! Scores UI-element detections (buttons, inputs, radios, dropdowns, ...)
//! against ground-truth annotations and reports per-class and macro-averaged
//! precision, recall and F1.
//!
//! The pipeline has three parts:
//! - **IoU**: overlap between two axis-aligned boxes
//! - **Matching**: greedy first-fit pairing of predictions with ground truth,
//!   one class of one file at a time, at IoU >= 0.5 by default
//! - **Aggregation**: TP/FP/FN summed over files, turned into class metrics,
//!   then averaged across classes without weighting
//!
//! ## Quick Start
//!
//! ```rust
//! use ui_detect_eval::{evaluate, load_from_string, render_table, EvaluationConfig, FileAnnotations};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"annotations": [{"tag": "Button", "x": 0, "y": 0, "width": 10, "height": 10}]}"#;
//!
//! let mut truth = FileAnnotations::new();
//! truth.insert("login.json".to_string(), load_from_string(json)?);
//! let predictions = truth.clone();
//!
//! let report = evaluate(&truth, &predictions, &EvaluationConfig::default())?;
//! println!("{}", render_table(&report));
//! # Ok(())
//! # }
//! ```
//!
//! ## Annotation Format
//!
//! One JSON file per screen, paired between the ground-truth and prediction
//! directories by file name:
//!
//! ```json
//! {
//!   "annotations": [
//!     { "tag": "Button", "x": 12, "y": 40, "width": 96, "height": 32 }
//!   ]
//! }
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod loader;
pub mod metrics;
pub mod matching;
pub mod evaluator;
pub mod report;
pub mod stats;

// Re-export commonly used types and functions
pub use error::{EvalError, Result};
pub use types::{
    Annotation, BoundingBox, ClassMetrics, EvaluationReport, FileAnnotations, MacroMetrics,
    MatchResult,
};
pub use config::{EvaluationConfig, OrphanPolicy, DEFAULT_CLASSES};
pub use loader::{load_directory, load_from_file, load_from_string};
pub use matching::{match_boxes, match_class, DEFAULT_IOU_THRESHOLD};
pub use evaluator::evaluate;
pub use report::{render_json, render_table};
pub use stats::EvaluationStats;
