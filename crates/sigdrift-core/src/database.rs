//! The host disassembler database, seen as a read-only capability.
//!
//! Signature generation never owns disassembly state. Everything it needs
//! from the host — function boundaries, instruction decoding, outgoing
//! references, string and name lookup — is consumed through the
//! [`CodeDatabase`] trait, injected explicitly into each extractor and
//! builder.

use crate::{Architecture, Endianness, Error, Instruction, StringLiteral};

/// Start and end addresses of a function. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionBounds {
    /// Entry address.
    pub start: u64,
    /// One past the last byte of the function body.
    pub end: u64,
}

impl FunctionBounds {
    /// Creates new bounds.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns the function's byte length.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the function body is empty.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if `addr` falls inside the function body.
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.start && addr < self.end
    }
}

/// Read-only view of the host disassembler's database.
pub trait CodeDatabase {
    /// Returns the target architecture.
    fn architecture(&self) -> Architecture;

    /// Returns the target process's byte order.
    fn endianness(&self) -> Endianness;

    /// Returns the boundaries of the function containing `addr`, if any.
    fn function_bounds(&self, addr: u64) -> Option<FunctionBounds>;

    /// Decodes the instruction starting at `addr`.
    fn instruction_at(&self, addr: u64) -> Result<Instruction, Error>;

    /// Returns the outgoing data references from the instruction at `addr`,
    /// in the host's order.
    fn data_refs_from(&self, addr: u64) -> Vec<u64>;

    /// Returns the outgoing code references from the instruction at `addr`.
    /// The fallthrough edge, when present, comes first.
    fn code_refs_from(&self, addr: u64) -> Vec<u64>;

    /// Interprets the data at `addr` as a string literal, if the host
    /// recognizes one there.
    fn string_at(&self, addr: u64) -> Option<StringLiteral>;

    /// Returns the symbolic name at `addr`, if any.
    fn name_at(&self, addr: u64) -> Option<String>;

    /// Returns true if `name` was synthesized by the host rather than
    /// assigned by a person or debug info.
    ///
    /// The default recognizes the anonymous code-location and
    /// anonymous-subroutine conventions. Hosts with other conventions
    /// override this.
    fn is_autogenerated_name(&self, name: &str) -> bool {
        name.starts_with("loc_") || name.starts_with("sub_")
    }

    /// Walks the instruction start addresses over `[start, end)`.
    fn instruction_heads(&self, start: u64, end: u64) -> Result<Vec<u64>, Error> {
        let mut heads = Vec::new();
        let mut addr = start;
        while addr < end {
            let insn = self.instruction_at(addr)?;
            if insn.size == 0 {
                // A zero-size instruction would stall the walk.
                return Err(Error::unknown_instruction(addr));
            }
            heads.push(addr);
            addr = insn.end_address();
        }
        Ok(heads)
    }
}
