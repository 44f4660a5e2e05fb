//! NDJSON output
//!
//! One JSON object per line. Every record carries an `event` field naming
//! its type; see `records` for the shapes.

pub mod records;

use serde::Serialize;
use std::io::{self, Write};

/// Write a typed record to a writer as one NDJSON line.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
