use std::io::Write;

use serde_json::Value;

use crate::io::IoError;

pub fn write_jsonl<W: Write>(mut writer: W, values: &[Value]) -> Result<(), IoError> {
    for value in values {
        serde_json::to_writer(&mut writer, value)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
