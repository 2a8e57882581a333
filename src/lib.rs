//! Birthday-bound collision search over truncated SHA-256 digests.
//!
//! `engine` holds the digest, truncation, collision search and sweep
//! algorithms; `cmd` wraps them as command runners for the CLI.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod logging;
pub mod util;
