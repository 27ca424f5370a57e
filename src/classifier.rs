//! Ball / cylinder / brick classification from edge-direction statistics
//!
//! The pipeline crops a fixed window, converts it to normalized grayscale,
//! computes Sobel-like gradients and histograms the directions of the strong
//! edges. Round objects spread their edge directions evenly across the
//! histogram; boxy objects concentrate them in a few bins. The standard
//! deviation of the bin counts decides the label.

use crate::error::ClassifyError;
use crate::gradient::GradientField;
use crate::grayscale::convert_to_grayscale;
use crate::histogram::EdgeHistogram;
use instant::Instant;
use ndarray::{s, ArrayView3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First row and column of the crop window.
pub const CROP_START: usize = 10;
/// One past the last row and column of the crop window.
pub const CROP_END: usize = 245;
/// Minimum number of color channels accepted.
pub const MIN_CHANNELS: usize = 3;
/// Gradient magnitude an edge must strictly exceed to be counted.
pub const MAGNITUDE_THRESHOLD: f64 = 0.95;

const BALL_MAX_SPREAD: f64 = 8.8;
const CYLINDER_MIN_SPREAD: f64 = 8.81;
const CYLINDER_MAX_SPREAD: f64 = 16.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLabel {
    Ball,
    Cylinder,
    Brick,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 3] = [ShapeLabel::Ball, ShapeLabel::Cylinder, ShapeLabel::Brick];

    /// Map the standard deviation of the histogram counts to a label.
    ///
    /// Spreads in `[8.8, 8.81]` match neither of the first two ranges and
    /// fall through to brick.
    pub fn from_spread(spread: f64) -> Self {
        if spread < BALL_MAX_SPREAD {
            ShapeLabel::Ball
        } else if spread > CYLINDER_MIN_SPREAD && spread < CYLINDER_MAX_SPREAD {
            ShapeLabel::Cylinder
        } else {
            ShapeLabel::Brick
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Ball => "ball",
            ShapeLabel::Cylinder => "cylinder",
            ShapeLabel::Brick => "brick",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the classifier computed on the way to its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub label: ShapeLabel,
    /// Population standard deviation of the histogram counts
    pub spread: f64,
    pub strong_edges: usize,
    pub histogram: EdgeHistogram,
    pub processing_time_ms: f32,
}

/// Label the object in an `H x W x C` RGB image with values in `[0, 255]`.
pub fn classify(image: ArrayView3<'_, f64>) -> Result<ShapeLabel, ClassifyError> {
    analyze(image).map(|report| report.label)
}

/// Run the full pipeline and keep the intermediate statistics.
#[tracing::instrument(skip_all, fields(height = image.dim().0, width = image.dim().1))]
pub fn analyze(image: ArrayView3<'_, f64>) -> Result<ClassificationReport, ClassifyError> {
    let start = Instant::now();
    let (height, width, channels) = image.dim();

    if height < CROP_END || width < CROP_END {
        return Err(ClassifyError::ImageTooSmall {
            height,
            width,
            required: CROP_END,
        });
    }
    if channels < MIN_CHANNELS {
        return Err(ClassifyError::TooFewChannels {
            channels,
            required: MIN_CHANNELS,
        });
    }

    let cropped = image.slice(s![CROP_START..CROP_END, CROP_START..CROP_END, ..]);
    let gray = convert_to_grayscale(cropped.mapv(|v| v / 255.0).view())?;
    let field = GradientField::compute(gray.view())?;

    let directions = field.strong_directions(MAGNITUDE_THRESHOLD);
    let histogram = EdgeHistogram::from_directions(&directions).ok_or(ClassifyError::NoStrongEdges {
        threshold: MAGNITUDE_THRESHOLD,
    })?;

    let spread = histogram.spread();
    let label = ShapeLabel::from_spread(spread);

    tracing::debug!(
        strong_edges = directions.len(),
        spread = spread,
        label = %label,
        "Edge histogram classified"
    );

    Ok(ClassificationReport {
        label,
        spread,
        strong_edges: directions.len(),
        histogram,
        processing_time_ms: start.elapsed().as_secs_f32() * 1000.0,
    })
}
