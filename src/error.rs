//! Error types for the classification pipeline

use thiserror::Error;

/// Failures raised by the filter, grayscale and classifier stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Image too small: {height}x{width}, crop window needs at least {required}x{required}")]
    ImageTooSmall {
        height: usize,
        width: usize,
        required: usize,
    },

    #[error("Image has {channels} channel(s), at least {required} required")]
    TooFewChannels { channels: usize, required: usize },

    #[error("Color image has no channels")]
    NoChannels,

    #[error("Kernel {kernel_rows}x{kernel_cols} does not fit inside image {image_rows}x{image_cols}")]
    KernelTooLarge {
        kernel_rows: usize,
        kernel_cols: usize,
        image_rows: usize,
        image_cols: usize,
    },

    #[error("Kernel is empty")]
    EmptyKernel,

    #[error("No gradient magnitude exceeds {threshold}, edge histogram is undefined")]
    NoStrongEdges { threshold: f64 },
}
