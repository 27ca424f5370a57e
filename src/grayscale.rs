use crate::error::ClassifyError;
use ndarray::{Array2, ArrayView3, Axis};

/// Convert an `H x W x C` color image to `H x W` by averaging the channels.
pub fn convert_to_grayscale(im: ArrayView3<'_, f64>) -> Result<Array2<f64>, ClassifyError> {
    im.mean_axis(Axis(2)).ok_or(ClassifyError::NoChannels)
}
