use std::fmt;

use serde::{Serialize, Serializer};

/// Width of a SHA-256 digest in bits.
pub const DIGEST_BITS: u32 = 256;

/// Width of a SHA-256 digest in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Immutable SHA-256 output.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of differing bits between two digests.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(left, right)| (left ^ right).count_ones())
            .sum()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Leading `bits` bits of a digest.
///
/// Bits past the width are always zero in `prefix`, so the derived
/// `PartialEq`/`Hash` compare exactly the retained prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruncatedValue {
    bits: u16,
    prefix: [u8; DIGEST_BYTES],
}

impl TruncatedValue {
    /// Builds a value from a digest without validating `bits`.
    ///
    /// Callers go through `engine::truncate::truncate`, which checks the width first.
    pub(crate) fn from_digest_unchecked(digest: &Digest, bits: u32) -> Self {
        let mut prefix = [0u8; DIGEST_BYTES];
        let full_bytes = (bits / 8) as usize;
        let rem_bits = bits % 8;
        prefix[..full_bytes].copy_from_slice(&digest.as_bytes()[..full_bytes]);
        if rem_bits > 0 {
            let mask = 0xffu8 << (8 - rem_bits);
            prefix[full_bytes] = digest.as_bytes()[full_bytes] & mask;
        }
        Self {
            bits: bits as u16,
            prefix,
        }
    }

    pub fn bits(&self) -> u32 {
        u32::from(self.bits)
    }

    /// Prefix as an unsigned integer, right-aligned. `None` above 64 bits.
    pub fn as_u64(&self) -> Option<u64> {
        let bits = self.bits();
        if bits > 64 {
            return None;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.prefix[..8]);
        let value = u64::from_be_bytes(word);
        Some(if bits == 0 { 0 } else { value >> (64 - bits) })
    }

    /// First `ceil(bits / 4)` hex nibbles of the digest.
    pub fn to_hex(&self) -> String {
        let nibbles = self.bits().div_ceil(4) as usize;
        let mut encoded = hex::encode(&self.prefix[..nibbles.div_ceil(2)]);
        encoded.truncate(nibbles);
        encoded
    }
}

impl fmt::Debug for TruncatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TruncatedValue({}/{})", self.to_hex(), self.bits)
    }
}

impl Serialize for TruncatedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// One input together with its digest and truncated value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InputRecord {
    pub input: String,
    pub digest: Digest,
    pub truncated: TruncatedValue,
}
