use std::io::Read;

use crate::cmd::CommandResponse;
use crate::cmd::digest::resolve_text;
use crate::engine::avalanche::{DEFAULT_ROUNDS, compare};

/// Input arguments for avalanche command execution API.
#[derive(Debug, Clone)]
pub struct AvalancheCommandArgs {
    pub text: Option<String>,
    pub rounds: u32,
}

impl Default for AvalancheCommandArgs {
    fn default() -> Self {
        Self {
            text: None,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

pub fn run_with_stdin<R: Read>(args: &AvalancheCommandArgs, stdin: R) -> CommandResponse {
    let base = match resolve_text(args.text.as_deref(), stdin) {
        Ok(base) => base,
        Err(message) => return CommandResponse::input_usage(message),
    };
    match compare(&base, args.rounds) {
        Ok(report) => CommandResponse::success(&report),
        Err(error) => CommandResponse::input_usage(error.to_string()),
    }
}

pub fn pipeline_steps() -> Vec<String> {
    vec![
        "resolve_avalanche_input".to_string(),
        "flip_first_byte_low_bit".to_string(),
        "chain_sha256_rounds".to_string(),
        "measure_hamming_distance".to_string(),
        "write_avalanche_report".to_string(),
    ]
}

pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fixed_round_count".to_string(),
    ]
}
