use sha2::{Digest as _, Sha256};

use crate::domain::digest::Digest;

/// SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> Digest {
    Digest::from_bytes(Sha256::digest(bytes).into())
}

/// SHA-256 of the UTF-8 encoding of `text`.
pub fn digest_str(text: &str) -> Digest {
    digest(text.as_bytes())
}
