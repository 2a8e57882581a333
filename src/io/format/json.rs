use std::io::Write;

use serde_json::Value;

use crate::io::IoError;

/// Whole table as one JSON array, newline-terminated.
pub fn write_json<W: Write>(mut writer: W, values: &[Value]) -> Result<(), IoError> {
    serde_json::to_writer(&mut writer, values)?;
    writer.write_all(b"\n")?;
    Ok(())
}
