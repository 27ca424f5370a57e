//! Valid-mode 2D correlation
//!
//! The kernel is slid over every position where it fits entirely inside the
//! image; there is no padding and the kernel is not flipped.

use crate::error::ClassifyError;
use ndarray::{s, Array2, ArrayView2, Axis, Zip};
use rayon::prelude::*;

/// Filter `im` by taking the dot product of each image neighborhood with `kernel`.
///
/// For an `H x W` image and an `M x N` kernel the result is
/// `(H - M + 1) x (W - N + 1)`.
pub fn filter_2d(
    im: ArrayView2<'_, f64>,
    kernel: ArrayView2<'_, f64>,
) -> Result<Array2<f64>, ClassifyError> {
    let (m, n) = kernel.dim();
    let (h, w) = im.dim();

    if m == 0 || n == 0 {
        return Err(ClassifyError::EmptyKernel);
    }

    if m > h || n > w {
        return Err(ClassifyError::KernelTooLarge {
            kernel_rows: m,
            kernel_cols: n,
            image_rows: h,
            image_cols: w,
        });
    }

    let mut filtered = Array2::<f64>::zeros((h - m + 1, w - n + 1));

    // Rows are independent, so they can be filled in parallel
    filtered
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            for (j, out) in row.iter_mut().enumerate() {
                let patch = im.slice(s![i..i + m, j..j + n]);
                *out = Zip::from(&patch)
                    .and(&kernel)
                    .fold(0.0, |acc, &p, &k| acc + p * k);
            }
        });

    Ok(filtered)
}
