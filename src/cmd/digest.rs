use std::io::Read;

use serde::Serialize;

use crate::cmd::CommandResponse;
use crate::domain::digest::Digest;
use crate::engine::digest::digest_str;

/// Input arguments for digest command execution API.
#[derive(Debug, Clone, Default)]
pub struct DigestCommandArgs {
    /// Text to hash; stdin is read when absent.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DigestReport {
    pub input: String,
    pub digest: Digest,
}

pub fn run_with_stdin<R: Read>(args: &DigestCommandArgs, stdin: R) -> CommandResponse {
    match resolve_text(args.text.as_deref(), stdin) {
        Ok(input) => {
            let digest = digest_str(&input);
            CommandResponse::success(&DigestReport { input, digest })
        }
        Err(message) => CommandResponse::input_usage(message),
    }
}

/// Explicit text, or stdin with one trailing line break removed.
pub(crate) fn resolve_text<R: Read>(explicit: Option<&str>, mut stdin: R) -> Result<String, String> {
    if let Some(text) = explicit {
        return Ok(text.to_string());
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|error| format!("failed to read stdin as UTF-8 text: {error}"))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

pub fn pipeline_steps() -> Vec<String> {
    vec![
        "resolve_digest_input".to_string(),
        "compute_sha256".to_string(),
        "write_digest_report".to_string(),
    ]
}

pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "utf8_input_bytes".to_string(),
    ]
}
