//! Byte-pattern step emission over a function body.

use crate::{BytePattern, Classifier, PatternStep, Result, SignatureError, Stability};
use sigdrift_core::{CodeDatabase, FunctionBounds};

/// Emits the byte-verification and cursor-movement steps for one function.
///
/// Walks the instruction stream from `bounds.start` to `bounds.end` in
/// address order. Stable instructions contribute their exact encoded
/// bytes; unstable ones contribute nothing. Every instruction is followed
/// by an `offset` of its size, so the cursor tracks the stream regardless
/// of which instructions contributed bytes, and a final `offset` of
/// `start - end` returns the cursor to the function entry.
///
/// With `verify == false` (no anchors narrow the search yet) the first
/// stable instruction emits a scan-capable `find-bytes` step; every other
/// byte step is an exact `verify-bytes`.
///
/// Decode failures abort generation: a malformed stream cannot produce a
/// trustworthy pattern.
pub fn build_byte_steps(
    db: &dyn CodeDatabase,
    bounds: FunctionBounds,
    classifier: Classifier,
    verify: bool,
) -> Result<Vec<PatternStep>> {
    let mut steps = Vec::new();
    let mut first_stable = true;
    let mut addr = bounds.start;

    while addr < bounds.end {
        let insn = db.instruction_at(addr)?;
        if insn.size == 0 {
            return Err(sigdrift_core::Error::unknown_instruction(addr).into());
        }

        let stability = classifier
            .classify(&insn)
            .ok_or_else(|| SignatureError::UnsupportedArchitecture(db.architecture()))?;

        if stability == Stability::Stable {
            let pattern = BytePattern::from_bytes(&insn.bytes);
            let step = if first_stable && !verify {
                PatternStep::FindBytesOr(pattern)
            } else {
                PatternStep::VerifyBytes(pattern)
            };
            first_stable = false;
            steps.push(step);
        }

        steps.push(PatternStep::Offset(insn.size as i64));
        addr = insn.end_address();
    }

    steps.push(PatternStep::Offset(
        bounds.start as i64 - bounds.end as i64,
    ));
    Ok(steps)
}
