//! Sobel-like gradient field

use crate::error::ClassifyError;
use crate::filter::filter_2d;
use ndarray::{arr2, Array2, ArrayView2, Zip};

type Kernel3 = [[f64; 3]; 3];

/// Horizontal derivative kernel; responds to vertical edges.
pub const HORIZONTAL_KERNEL: Kernel3 = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];

/// Vertical derivative kernel; responds to horizontal edges.
pub const VERTICAL_KERNEL: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Per-pixel gradient components and their polar form.
#[derive(Clone, Debug)]
pub struct GradientField {
    pub gx: Array2<f64>,
    pub gy: Array2<f64>,
    pub magnitude: Array2<f64>,
    /// `atan2(gy, gx)` in radians
    pub direction: Array2<f64>,
}

impl GradientField {
    /// Filter `gray` with both kernels and derive magnitude and direction.
    pub fn compute(gray: ArrayView2<'_, f64>) -> Result<Self, ClassifyError> {
        let gx = filter_2d(gray, arr2(&HORIZONTAL_KERNEL).view())?;
        let gy = filter_2d(gray, arr2(&VERTICAL_KERNEL).view())?;

        let magnitude = Zip::from(&gx)
            .and(&gy)
            .map_collect(|&x, &y| (x * x + y * y).sqrt());
        let direction = Zip::from(&gx).and(&gy).map_collect(|&x, &y| y.atan2(x));

        Ok(Self {
            gx,
            gy,
            magnitude,
            direction,
        })
    }

    /// Directions at every position whose magnitude is strictly above `threshold`,
    /// in row-major order.
    pub fn strong_directions(&self, threshold: f64) -> Vec<f64> {
        Zip::from(&self.magnitude)
            .and(&self.direction)
            .fold(Vec::new(), |mut selected, &mag, &dir| {
                if mag > threshold {
                    selected.push(dir);
                }
                selected
            })
    }
}
