//! Literal-string anchor extraction.
//!
//! A string literal referenced by a function is a stronger identifier than
//! any of the function's own bytes: the literal's content survives
//! recompilation even when every instruction moves. Each recognized
//! literal becomes an `xrefs-to` anchor carrying the literal's in-memory
//! bytes.

use std::collections::HashSet;

use crate::{Anchor, BytePattern, PatternStep, Result, SignatureError, StepMode};
use sigdrift_core::{CodeDatabase, StringKind, StringLiteral};

/// Renders a string literal as the byte pattern its in-memory form takes.
///
/// Only plain C strings are supported: content followed by a NUL. The
/// other kinds carry length prefixes or wide characters whose layout this
/// renderer does not reproduce, and guessing would corrupt the signature.
fn literal_pattern(literal: &StringLiteral) -> Result<BytePattern> {
    match literal.kind {
        StringKind::C => {
            let mut bytes = literal.bytes.clone();
            bytes.push(0);
            Ok(BytePattern::from_bytes(&bytes))
        }
        kind => Err(SignatureError::UnrecognizedStringEncoding {
            address: literal.address,
            kind,
        }),
    }
}

/// Collects an anchor step for every recognized string literal the
/// function references.
///
/// Each referenced address contributes at most one anchor, however many
/// instructions reference it. Literals with unsupported encodings are
/// skipped, not fabricated. Returns an empty list when `addr` is not
/// inside a known function.
pub fn function_strings(db: &dyn CodeDatabase, addr: u64) -> Result<Vec<PatternStep>> {
    let Some(bounds) = db.function_bounds(addr) else {
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let mut steps = Vec::new();

    for head in db.instruction_heads(bounds.start, bounds.end)? {
        for target in db.data_refs_from(head) {
            let Some(literal) = db.string_at(target) else {
                continue;
            };
            if !seen.insert(target) {
                continue;
            }
            match literal_pattern(&literal) {
                Ok(pattern) => steps.push(PatternStep::XrefsTo {
                    anchor: Anchor::Bytes(pattern),
                    function_start_only: true,
                    mode: StepMode::Alternative,
                }),
                Err(SignatureError::UnrecognizedStringEncoding { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    Ok(steps)
}
