//! Span wrapper for classifying a single file

use crate::classifier::ClassificationReport;
use std::path::Path;
use std::time::Instant;
use tracing::{field, span, Level, Span};
use uuid::Uuid;

/// Span covering the load + classify of one image.
pub struct ClassificationSpan {
    span: Span,
    start_time: Instant,
}

impl ClassificationSpan {
    pub fn new(path: &Path, correlation_id: Option<Uuid>) -> Self {
        let span = span!(
            Level::INFO,
            "classify_image",
            path = %path.display(),
            correlation_id = field::Empty,
            label = field::Empty,
            spread = field::Empty,
            execution_time_ms = field::Empty
        );
        if let Some(corr_id) = correlation_id {
            span.record("correlation_id", field::display(corr_id));
        }

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    /// Record a successful classification
    pub fn record_report(&self, report: &ClassificationReport) {
        let duration = self.start_time.elapsed();
        self.span.record("label", report.label.as_str());
        self.span.record("spread", report.spread);
        self.span.record("execution_time_ms", duration.as_millis() as u64);

        tracing::info!(
            parent: &self.span,
            label = %report.label,
            spread = format!("{:.3}", report.spread),
            strong_edges = report.strong_edges,
            execution_time_ms = duration.as_millis() as u64,
            "Image classified"
        );
    }

    /// Record a load or classification failure
    pub fn record_failure(&self, error: &anyhow::Error) {
        let duration = self.start_time.elapsed();
        self.span.record("execution_time_ms", duration.as_millis() as u64);

        tracing::warn!(
            parent: &self.span,
            error = %error,
            execution_time_ms = duration.as_millis() as u64,
            "Image could not be classified"
        );
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}
