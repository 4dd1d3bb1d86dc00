//! Decoded-instruction view consumed by signature generation.

/// A decoded instruction as reported by the host database.
///
/// Only the fields signature generation consumes are carried: address,
/// size, the raw encoded bytes, and the mnemonic the classifier inspects.
/// Operand and control-flow analysis stays with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Virtual address of this instruction.
    pub address: u64,
    /// Size in bytes.
    pub size: usize,
    /// Raw bytes of the instruction.
    pub bytes: Vec<u8>,
    /// Mnemonic string (e.g., "lis", "add", "bl").
    pub mnemonic: String,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new(address: u64, size: usize, bytes: Vec<u8>, mnemonic: impl Into<String>) -> Self {
        Self {
            address,
            size,
            bytes,
            mnemonic: mnemonic.into(),
        }
    }

    /// Returns the end address (address + size).
    pub fn end_address(&self) -> u64 {
        self.address + self.size as u64
    }
}
