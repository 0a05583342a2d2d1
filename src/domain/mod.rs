pub mod model;

pub use model::{Field, InputRecord, OutputRecord, PartialInputRecord};
