//! # sigdrift-core
//!
//! Core abstractions for drift-tolerant function signature generation.
//! This crate defines the architecture identifiers, the decoded-instruction
//! view, string literal types, and the read-only [`CodeDatabase`] capability
//! through which the host disassembler's state is consumed.

pub mod arch;
pub mod database;
pub mod error;
pub mod instruction;
pub mod strings;

pub use arch::{Architecture, Endianness};
pub use database::{CodeDatabase, FunctionBounds};
pub use error::Error;
pub use instruction::Instruction;
pub use strings::{StringKind, StringLiteral};
