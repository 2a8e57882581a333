pub mod avalanche;
pub mod collide;
pub mod digest;
pub mod sweep;
pub mod truncate;

use serde::Serialize;
use serde_json::{Value, json};

/// Structured command response that carries exit-code mapping and JSON payload.
///
/// Exit codes: 0 success, 2 search limit reached, 3 input/usage error,
/// 1 internal error. Payloads for 0 and 2 belong on stdout, the rest on stderr.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

impl CommandResponse {
    pub fn success<T: Serialize>(report: &T) -> Self {
        Self::serialized(0, report)
    }

    pub fn serialized<T: Serialize>(exit_code: i32, report: &T) -> Self {
        match serde_json::to_value(report) {
            Ok(payload) => Self { exit_code, payload },
            Err(error) => Self::internal(format!("failed to serialize report: {error}")),
        }
    }

    pub fn input_usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": message.into(),
                "code": 3,
                "details": {},
            }),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": message.into(),
                "code": 1,
                "details": {},
            }),
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        matches!(self.exit_code, 0 | 2)
    }

    /// Records the failing command in an error envelope's `details`.
    pub fn with_command(mut self, command: &str) -> Self {
        if !self.writes_to_stdout() {
            if let Some(details) = self
                .payload
                .get_mut("details")
                .and_then(Value::as_object_mut)
            {
                details.insert("command".to_string(), Value::from(command));
            }
        }
        self
    }
}
