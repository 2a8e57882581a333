use crate::domain::digest::{DIGEST_BITS, Digest, InputRecord, TruncatedValue};
use crate::domain::error::TruncateError;
use crate::engine::digest::digest_str;

/// Checks that `bits` is a usable truncation width.
pub fn validate_bits(bits: u32) -> Result<(), TruncateError> {
    if bits == 0 || bits % 2 != 0 || bits > DIGEST_BITS {
        return Err(TruncateError::InvalidParameter {
            bits,
            max: DIGEST_BITS,
        });
    }
    Ok(())
}

/// Leading `bits` bits of `digest`.
pub fn truncate(digest: &Digest, bits: u32) -> Result<TruncatedValue, TruncateError> {
    validate_bits(bits)?;
    Ok(TruncatedValue::from_digest_unchecked(digest, bits))
}

/// Digests and truncates `input`.
pub fn record(input: impl Into<String>, bits: u32) -> Result<InputRecord, TruncateError> {
    let input = input.into();
    let digest = digest_str(&input);
    let truncated = truncate(&digest, bits)?;
    Ok(InputRecord {
        input,
        digest,
        truncated,
    })
}
