use crate::core::{calculator, validator};
use crate::core::validator::ValidationReport;
use crate::domain::model::{InputRecord, OutputRecord, PartialInputRecord};
use serde::Serialize;

/// The last valid input/output pair, owned by the host. The core itself
/// keeps no state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub input: InputRecord,
    pub output: OutputRecord,
}

/// Host-side lifecycle around the core: set on successful compute, cleared
/// on validation failure, so a stale result can never be exported.
#[derive(Debug, Default)]
pub struct Session {
    last: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn apply(&mut self, raw: &PartialInputRecord) -> Result<&Snapshot, ValidationReport> {
        match validator::parse(raw) {
            Ok(input) => {
                let output = calculator::compute(&input);
                tracing::debug!(?input, "computed ROI snapshot");
                Ok(&*self.last.insert(Snapshot { input, output }))
            }
            Err(report) => {
                tracing::debug!(failed_fields = report.errors.len(), "validation failed");
                self.last = None;
                Err(report)
            }
        }
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
