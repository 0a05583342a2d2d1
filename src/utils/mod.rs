pub mod error;
pub mod export;
pub mod format;
pub mod logger;

pub use error::{Result, RoiError};
