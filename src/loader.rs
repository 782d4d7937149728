//! JSON loading utilities for per-file annotation directories.
//!
//! Each `.json` file in a directory describes one screen:
//!
//! ```json
//! {
//!   "annotations": [
//!     { "tag": "Button", "x": 12, "y": 40, "width": 96, "height": 32 }
//!   ]
//! }
//! ```
//!
//! The file name is the key used to pair ground truth with predictions.

use crate::error::{EvalError, Result};
use crate::types::{Annotation, AnnotationFile, FileAnnotations};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Load every `.json` annotation file in a directory.
///
/// Subdirectories and files with other extensions are skipped. Files are
/// keyed by file name, so ground-truth and prediction directories pair up
/// by name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read, a file is not valid
/// annotation JSON, or any box is malformed.
///
/// # Example
///
/// ```no_run
/// use ui_detect_eval::loader::load_directory;
///
/// let truths = load_directory("ground-truth-jsons").unwrap();
/// println!("Loaded {} files", truths.len());
/// ```
pub fn load_directory<P: AsRef<Path>>(dir: P) -> Result<FileAnnotations> {
    let dir = dir.as_ref();
    let mut files = FileAnnotations::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(EvalError::InvalidAnnotation(format!(
                "file name {} is not valid UTF-8",
                path.display()
            )));
        };

        let annotations = load_from_file(&path)?;
        debug!(file = name, annotations = annotations.len(), "Loaded annotation file");
        files.insert(name.to_string(), annotations);
    }

    info!(dir = %dir.display(), files = files.len(), "Loaded annotation directory");

    Ok(files)
}

/// Load the annotations of a single JSON file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Annotation>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let parsed: AnnotationFile =
        serde_json::from_reader(reader).map_err(|source| EvalError::InvalidAnnotationFile {
            file: path.display().to_string(),
            source,
        })?;
    let annotations = parsed.into_annotations();

    validate_annotations(&annotations, &path.display().to_string())?;

    Ok(annotations)
}

/// Load annotations from a JSON string.
///
/// # Example
///
/// ```
/// use ui_detect_eval::loader::load_from_string;
///
/// let json = r#"{"annotations": [{"tag": "Radio", "x": 0, "y": 0, "width": 8, "height": 8}]}"#;
/// let annotations = load_from_string(json).unwrap();
/// assert_eq!(annotations[0].tag, "Radio");
/// ```
pub fn load_from_string(json_str: &str) -> Result<Vec<Annotation>> {
    let parsed: AnnotationFile = serde_json::from_str(json_str)?;
    let annotations = parsed.into_annotations();
    validate_annotations(&annotations, "<string>")?;
    Ok(annotations)
}

/// Validate tags and box geometry of loaded annotations.
fn validate_annotations(annotations: &[Annotation], source: &str) -> Result<()> {
    for (idx, annotation) in annotations.iter().enumerate() {
        if annotation.tag.trim().is_empty() {
            return Err(EvalError::InvalidAnnotation(format!(
                "{}: annotation {} has an empty tag",
                source, idx
            )));
        }

        if !annotation.bbox.is_valid() {
            let b = &annotation.bbox;
            return Err(EvalError::InvalidBoundingBox(format!(
                "{}: annotation {} ({}) has x={}, y={}, width={}, height={}",
                source, idx, annotation.tag, b.x, b.y, b.width, b.height
            )));
        }
    }

    Ok(())
}
