use crate::app::session::Snapshot;
use crate::utils::error::Result;
use crate::utils::format;
use std::path::Path;

/// Writes the snapshot as a two-column `metric,value` CSV: the eight inputs
/// followed by the ten derived metrics.
pub fn write_snapshot_csv<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["metric", "value"])?;
    for (name, value) in snapshot.input.fields() {
        writer.write_record([name, &format::csv_value(value)])?;
    }
    for (name, value) in snapshot.output.fields() {
        writer.write_record([name, &format::csv_value(value)])?;
    }
    writer.flush()?;
    Ok(())
}
