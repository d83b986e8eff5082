//! CSV script loader.
//!
//! # CSV format
//!
//! One row per event, any order (events sharing a tick keep file order).
//!
//! ```csv
//! tick,kind,lift,floor,direction
//! 0,call,,5,up
//! 8,call,,2,down
//! 16,panel,A,5,
//! ```
//!
//! | `kind`  | Required columns            |
//! |---------|-----------------------------|
//! | `call`  | `floor`, `direction` (`up`/`down`) |
//! | `panel` | `lift`, `floor`             |
//!
//! Floors and lift IDs are not checked here; the simulation builder
//! validates a script against its floor range and roster.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Call, Direction, Tick};

use crate::{EventQueue, ScheduleError, ScriptEvent};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    tick:      u64,
    kind:      String,
    lift:      Option<String>,
    floor:     i32,
    direction: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`EventQueue`] from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<EventQueue, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scripts embedded in
/// a binary.
pub fn load_script_reader<R: Read>(reader: R) -> Result<EventQueue, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut queue = EventQueue::new();

    for (row_index, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
        // Header is line 1.
        let line = row_index + 2;
        let row = result.map_err(|e| ScheduleError::Parse(format!("line {line}: {e}")))?;
        let event = parse_event(row.kind.as_str(), row.lift, row.floor, row.direction.as_deref())
            .map_err(|msg| ScheduleError::Parse(format!("line {line}: {msg}")))?;
        queue.push(Tick(row.tick), event);
    }

    Ok(queue)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(
    kind:      &str,
    lift:      Option<String>,
    floor:     i32,
    direction: Option<&str>,
) -> Result<ScriptEvent, String> {
    match kind.to_ascii_lowercase().as_str() {
        "call" => {
            let direction = parse_direction(direction.unwrap_or_default())?;
            Ok(ScriptEvent::Call(Call::new(floor, direction)))
        }
        "panel" => match lift.filter(|id| !id.is_empty()) {
            Some(lift) => Ok(ScriptEvent::Panel { lift, floor }),
            None       => Err("panel event without a lift id".to_owned()),
        },
        other => Err(format!("unknown event kind {other:?}: expected \"call\" or \"panel\"")),
    }
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    match s.to_ascii_lowercase().as_str() {
        "up"   | "u" | "^" => Ok(Direction::Up),
        "down" | "d" | "v" => Ok(Direction::Down),
        other => Err(format!("invalid direction {other:?}: expected \"up\" or \"down\"")),
    }
}
