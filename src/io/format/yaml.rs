use std::io::Write;

use serde_json::Value;

use crate::io::IoError;

/// Whole table as one YAML sequence.
pub fn write_yaml<W: Write>(writer: W, values: &[Value]) -> Result<(), IoError> {
    serde_yaml::to_writer(writer, values)?;
    Ok(())
}
