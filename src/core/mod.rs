pub mod calculator;
pub mod validator;

pub use calculator::{compute, sanitize};
pub use validator::{parse, validate, ValidationReport};
