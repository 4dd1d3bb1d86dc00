//! Error types for sigdrift-core.

use thiserror::Error;

/// Error type for instruction decoding against the host database.
#[derive(Error, Debug)]
pub enum Error {
    /// No decodable instruction at the given address.
    #[error("no instruction at {address:#x}")]
    UnknownInstruction { address: u64 },

    /// Instruction was truncated (not enough bytes).
    #[error("truncated instruction at {address:#x}: need {needed} bytes, have {available}")]
    Truncated {
        address: u64,
        needed: usize,
        available: usize,
    },
}

impl Error {
    /// Creates a new UnknownInstruction error.
    pub fn unknown_instruction(address: u64) -> Self {
        Self::UnknownInstruction { address }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u64, needed: usize, available: usize) -> Self {
        Self::Truncated {
            address,
            needed,
            available,
        }
    }
}
