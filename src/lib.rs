pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::{Session, Snapshot};
pub use crate::config::CliConfig;
pub use crate::core::{compute, parse, sanitize, validate, ValidationReport};
pub use crate::domain::{Field, InputRecord, OutputRecord, PartialInputRecord};
pub use crate::utils::error::{Result, RoiError};
