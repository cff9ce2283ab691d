//! The append-only activity log embedded in record bodies.

use chrono::NaiveDateTime;
use onebrain_core::{Error, ProjectRecord, Result};

/// Minute-precision stamp format used in activity marker lines.
pub const ACTIVITY_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Append a timestamped note to a record.
///
/// Returns a new record whose body is the old body followed by a marker
/// line and the trimmed note; structured fields carry over unchanged.
/// Prior body content, including every earlier activity block, is never
/// altered or removed. The caller upserts the result under the same id
/// (last write wins — the body already incorporates all history).
pub fn append_activity(
    record: &ProjectRecord,
    note: &str,
    now: NaiveDateTime,
) -> Result<ProjectRecord> {
    let note = note.trim();
    if note.is_empty() {
        return Err(Error::EmptyInput("note"));
    }
    let stamp = now.format(ACTIVITY_STAMP_FORMAT);
    let body = format!("{}\n\n───── Activity {stamp} ─────\n{note}", record.body);
    Ok(ProjectRecord {
        fields: record.fields.clone(),
        body,
    })
}
