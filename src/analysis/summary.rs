use super::batch::FileReport;
use crate::classifier::ShapeLabel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Label counts and spread statistics over a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub failures: usize,
    pub label_counts: BTreeMap<ShapeLabel, usize>,
    pub mean_spread: Option<f64>,
    pub min_spread: Option<f64>,
    pub max_spread: Option<f64>,
    pub mean_processing_time_ms: Option<f32>,
    pub generated_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut label_counts: BTreeMap<ShapeLabel, usize> =
            ShapeLabel::ALL.iter().map(|&label| (label, 0)).collect();

        let successes: Vec<_> = reports.iter().filter_map(|r| r.report.as_ref()).collect();
        for report in &successes {
            *label_counts.entry(report.label).or_insert(0) += 1;
        }

        let spreads: Vec<f64> = successes.iter().map(|r| r.spread).collect();
        let (mean_spread, min_spread, max_spread, mean_processing_time_ms) = if successes.is_empty() {
            (None, None, None, None)
        } else {
            let n = successes.len();
            (
                Some(spreads.iter().sum::<f64>() / n as f64),
                spreads.iter().copied().reduce(f64::min),
                spreads.iter().copied().reduce(f64::max),
                Some(successes.iter().map(|r| r.processing_time_ms).sum::<f32>() / n as f32),
            )
        };

        Self {
            total: reports.len(),
            failures: reports.len() - successes.len(),
            label_counts,
            mean_spread,
            min_spread,
            max_spread,
            mean_processing_time_ms,
            generated_at: Utc::now(),
        }
    }

    pub fn count(&self, label: ShapeLabel) -> usize {
        self.label_counts.get(&label).copied().unwrap_or(0)
    }
}
