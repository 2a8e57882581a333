use serde::Serialize;

use crate::domain::digest::Digest;
use crate::engine::digest::digest_str;

pub const DEFAULT_ROUNDS: u32 = 10;

/// Two inputs one bit apart and their chained digests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AvalancheReport {
    pub first_input: String,
    pub second_input: String,
    pub rounds: u32,
    pub first_digest: Digest,
    pub second_digest: Digest,
    pub hamming_distance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvalancheError {
    #[error("input must not be empty")]
    EmptyInput,

    #[error("flipping the low bit of the first byte does not yield valid UTF-8")]
    NotUtf8,

    #[error("rounds must be at least 1")]
    ZeroRounds,
}

/// `base` with the least significant bit of its first byte flipped.
pub fn flip_low_bit(base: &str) -> Result<String, AvalancheError> {
    let mut bytes = base.as_bytes().to_vec();
    let first = bytes.first_mut().ok_or(AvalancheError::EmptyInput)?;
    *first ^= 0b0000_0001;
    String::from_utf8(bytes).map_err(|_| AvalancheError::NotUtf8)
}

/// Hashes `input`, then re-hashes the hex text of each digest, `rounds` times in total.
pub fn chain(input: &str, rounds: u32) -> Result<Digest, AvalancheError> {
    if rounds == 0 {
        return Err(AvalancheError::ZeroRounds);
    }
    let mut current = digest_str(input);
    for _ in 1..rounds {
        current = digest_str(&current.to_hex());
    }
    Ok(current)
}

pub fn compare(base: &str, rounds: u32) -> Result<AvalancheReport, AvalancheError> {
    let second_input = flip_low_bit(base)?;
    let first_digest = chain(base, rounds)?;
    let second_digest = chain(&second_input, rounds)?;
    Ok(AvalancheReport {
        first_input: base.to_string(),
        second_input,
        rounds,
        hamming_distance: first_digest.hamming_distance(&second_digest),
        first_digest,
        second_digest,
    })
}
