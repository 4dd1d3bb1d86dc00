//! Named call-target anchor extraction.
//!
//! A call to a function that has a meaningful name anchors a signature as
//! well as a string does: the callee's name survives rebuilds even when
//! the call instruction's displacement changes.

use std::collections::HashSet;

use crate::{Anchor, PatternStep, Result, StepMode};
use sigdrift_core::CodeDatabase;

/// Collects an anchor step for every named target of a secondary outgoing
/// code reference in the function.
///
/// An instruction's first outgoing code reference is the fallthrough edge;
/// the interesting target (call destination, taken branch) is the second,
/// when there is one. Targets with no name, or with a host-synthesized
/// name, are skipped — those names do not survive a rebuild any better
/// than raw addresses do. Each target contributes at most one anchor.
/// Returns an empty list when `addr` is not inside a known function.
pub fn function_code_references(db: &dyn CodeDatabase, addr: u64) -> Result<Vec<PatternStep>> {
    let Some(bounds) = db.function_bounds(addr) else {
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let mut steps = Vec::new();

    for head in db.instruction_heads(bounds.start, bounds.end)? {
        let refs = db.code_refs_from(head);
        if refs.len() < 2 {
            continue;
        }
        // Second reference only. Targets beyond the second are ignored.
        let target = refs[1];

        let Some(name) = db.name_at(target) else {
            continue;
        };
        if db.is_autogenerated_name(&name) {
            continue;
        }
        if !seen.insert(target) {
            continue;
        }

        steps.push(PatternStep::XrefsTo {
            anchor: Anchor::Name(name),
            function_start_only: true,
            mode: StepMode::Alternative,
        });
    }

    Ok(steps)
}
