use crate::classifier::{analyze, ClassificationReport};
use crate::data::load_rgb_image;
use crate::logging::ClassificationSpan;
use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Outcome of classifying one file. Exactly one of `report` and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub correlation_id: Uuid,
    pub report: Option<ClassificationReport>,
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_success(&self) -> bool {
        self.report.is_some()
    }
}

/// Load and classify one image file.
///
/// Classification failures keep their [`crate::ClassifyError`] underneath the
/// context naming the file, so callers can downcast.
pub fn inspect_file(path: &Path) -> crate::Result<ClassificationReport> {
    let image = load_rgb_image(path)?;
    analyze(image.view()).with_context(|| format!("Failed to classify {}", path.display()))
}

/// Classifies many images in parallel, collecting failures instead of stopping.
#[derive(Debug, Default)]
pub struct BatchRunner;

impl BatchRunner {
    pub fn new() -> Self {
        Self
    }

    /// Classify every path; the output keeps the input order.
    pub fn run(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        tracing::info!(files = paths.len(), "Starting batch classification");
        paths.par_iter().map(|path| self.run_one(path)).collect()
    }

    /// Load and classify a single file inside its own span.
    pub fn run_one(&self, path: &Path) -> FileReport {
        let correlation_id = Uuid::new_v4();
        let span = ClassificationSpan::new(path, Some(correlation_id));
        let _entered = span.enter();

        match inspect_file(path) {
            Ok(report) => {
                span.record_report(&report);
                FileReport {
                    path: path.to_path_buf(),
                    correlation_id,
                    report: Some(report),
                    error: None,
                }
            }
            Err(e) => {
                span.record_failure(&e);
                FileReport {
                    path: path.to_path_buf(),
                    correlation_id,
                    report: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        }
    }
}
