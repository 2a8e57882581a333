use std::io::Write;

use serde_json::Value;

use crate::io::IoError;

/// Header row holds every key in first-seen order, so table columns follow
/// the record field order.
pub fn write_csv<W: Write>(writer: W, values: &[Value]) -> Result<(), IoError> {
    let mut headers: Vec<String> = Vec::new();
    for value in values {
        if let Value::Object(map) = value {
            for key in map.keys() {
                if !headers.iter().any(|seen| seen == key) {
                    headers.push(key.clone());
                }
            }
        }
    }
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    if !headers.is_empty() {
        csv_writer.write_record(&headers)?;
    }
    for (index, value) in values.iter().enumerate() {
        let Value::Object(map) = value else {
            return Err(IoError::InvalidCsvRow { index });
        };
        let row: Vec<String> = headers
            .iter()
            .map(|key| map.get(key).map(stringify_csv_value).unwrap_or_default())
            .collect();
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn stringify_csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
