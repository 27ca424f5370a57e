pub mod analysis;
pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod gradient;
pub mod grayscale;
pub mod histogram;
pub mod logging;
pub mod visualization;

pub use classifier::{analyze, classify, ClassificationReport, ShapeLabel};
pub use data::*;
pub use error::ClassifyError;
pub use filter::filter_2d;
pub use grayscale::convert_to_grayscale;

pub type Result<T> = anyhow::Result<T>;
