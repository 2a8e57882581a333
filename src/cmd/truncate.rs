use std::io::Read;

use serde::Serialize;

use crate::cmd::CommandResponse;
use crate::cmd::digest::resolve_text;
use crate::domain::digest::{Digest, TruncatedValue};
use crate::engine::truncate::record;

/// Input arguments for truncate command execution API.
#[derive(Debug, Clone)]
pub struct TruncateCommandArgs {
    pub text: Option<String>,
    pub bits: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TruncateReport {
    pub input: String,
    pub bits: u32,
    pub digest: Digest,
    pub truncated: TruncatedValue,
    /// Prefix as an integer; omitted above 64 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_value: Option<u64>,
}

pub fn run_with_stdin<R: Read>(args: &TruncateCommandArgs, stdin: R) -> CommandResponse {
    let input = match resolve_text(args.text.as_deref(), stdin) {
        Ok(input) => input,
        Err(message) => return CommandResponse::input_usage(message),
    };
    match record(input, args.bits) {
        Ok(record) => CommandResponse::success(&TruncateReport {
            truncated_value: record.truncated.as_u64(),
            input: record.input,
            bits: args.bits,
            digest: record.digest,
            truncated: record.truncated,
        }),
        Err(error) => CommandResponse::input_usage(error.to_string()),
    }
}

pub fn pipeline_steps() -> Vec<String> {
    vec![
        "resolve_truncate_input".to_string(),
        "validate_bit_width".to_string(),
        "compute_sha256".to_string(),
        "truncate_digest".to_string(),
        "write_truncate_report".to_string(),
    ]
}

pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "bit_width_validated_before_hashing".to_string(),
    ]
}
