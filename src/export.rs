//! Timetable export.
//!
//! Writes a decoded timetable as CSV, one row per session. JSON export
//! comes for free through the serde derives on [`Timetable`].

use std::borrow::Cow;
use std::io::{self, Write};

use crate::models::Timetable;

/// Writes a timetable as CSV.
///
/// Header `subject,teacher,group,room,time_slot`, then one row per entry
/// in session order. Fields containing commas, quotes, or newlines are
/// quoted.
pub fn write_csv<W: Write>(timetable: &Timetable, mut writer: W) -> io::Result<()> {
    writeln!(writer, "subject,teacher,group,room,time_slot")?;
    for entry in &timetable.entries {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(&entry.subject),
            csv_field(&entry.teacher_id),
            csv_field(&entry.group_id),
            csv_field(&entry.room_id),
            csv_field(entry.slot.as_str()),
        )?;
    }
    Ok(())
}

fn csv_field(raw: &str) -> Cow<'_, str> {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}
