//! # sigdrift-signatures
//!
//! Drift-tolerant function signature generation.
//!
//! A signature describes how to locate one function across different builds
//! of the same binary. Instructions whose encoding embeds an address or
//! displacement (literal loads, branches, calls) differ between builds even
//! when the function is semantically unchanged, so they are skipped with
//! positional offsets instead of matched byte-for-byte. The signature is
//! additionally anchored on references that survive relinking entirely:
//! string literals and named call targets.
//!
//! # Example
//!
//! ```ignore
//! use sigdrift_signatures::{generate, TempSlot};
//!
//! // db implements sigdrift_core::CodeDatabase
//! let signature = generate(&db, 0x0804_1000)?;
//! TempSlot::new().save(&signature)?;
//! ```

mod assemble;
mod builder;
mod classify;
mod pattern;
mod refs;
mod signature;
mod step;
mod store;
mod strings;

pub use assemble::generate;
pub use builder::build_byte_steps;
pub use classify::{Classifier, Stability};
pub use pattern::BytePattern;
pub use refs::function_code_references;
pub use signature::{Signature, SignatureKind};
pub use step::{Anchor, PatternStep, StepMode};
pub use store::TempSlot;
pub use strings::function_strings;

use sigdrift_core::{Architecture, StringKind};

/// Error type for signature operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// A referenced string uses an encoding we do not render to bytes.
    /// Recovered locally: the one reference is skipped, not fabricated.
    #[error("string at {address:#x} has unsupported encoding {}", .kind.name())]
    UnrecognizedStringEncoding { address: u64, kind: StringKind },

    /// No byte-step builder for the architecture and no anchors either.
    /// A signature with zero usable steps would match everything.
    #[error("no signature support for architecture {}", .0.name())]
    UnsupportedArchitecture(Architecture),

    /// The target address resolves to no function.
    #[error("no function at {0:#x}")]
    NoFunction(u64),

    /// Generation produced nothing but cursor movement.
    #[error("signature for {0} has no usable steps")]
    EmptySignature(String),

    /// Invalid byte pattern text.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A step command failed to parse.
    #[error("invalid step: {0}")]
    InvalidStep(String),

    /// The host failed to decode an instruction inside the function.
    #[error("decode failed: {0}")]
    Decode(#[from] sigdrift_core::Error),

    /// The persisted document fails structural parsing.
    #[error("malformed signature document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// IO error on the persisted document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SignatureError>;
