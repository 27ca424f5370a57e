pub mod batch;
pub mod summary;

pub use batch::*;
pub use summary::*;
