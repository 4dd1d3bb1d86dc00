//! Byte pattern representation for signature steps.
//!
//! Patterns here are concrete byte sequences, rendered as lowercase hex
//! pairs separated by single spaces (`"4f 4b 00"`). There are no wildcards:
//! bytes that vary between builds never enter a pattern at all — the step
//! list crosses them with `offset` skips instead.

use crate::{Result, SignatureError};

/// A concrete byte pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BytePattern {
    bytes: Vec<u8>,
}

impl BytePattern {
    /// Create an empty pattern.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a pattern from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Parse a pattern from space-separated hex pairs.
    ///
    /// Format: `"4f 4b 00"`. Each part must be exactly two hex digits.
    pub fn parse(s: &str) -> Result<Self> {
        let mut bytes = Vec::new();

        for part in s.split_whitespace() {
            if part.len() != 2 {
                return Err(SignatureError::InvalidPattern(format!(
                    "invalid hex byte: {}",
                    part
                )));
            }
            let value = u8::from_str_radix(part, 16).map_err(|_| {
                SignatureError::InvalidPattern(format!("invalid hex byte: {}", part))
            })?;
            bytes.push(value);
        }

        Ok(Self { bytes })
    }

    /// Get the pattern length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get the pattern bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to the hex string representation.
    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for BytePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BytePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
