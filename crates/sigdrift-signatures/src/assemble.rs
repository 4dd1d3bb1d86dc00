//! Signature assembly: anchor steps first, then architecture byte steps.

use crate::{
    build_byte_steps, function_code_references, function_strings, Classifier, Result, Signature,
    SignatureError,
};
use sigdrift_core::CodeDatabase;

/// Generates a signature for the function containing `addr`.
///
/// String anchors come first, then named-reference anchors; both survive
/// rebuilds that move every byte of the function. Byte steps follow when
/// the architecture has a classifier. If any anchors exist, the byte steps
/// are exact verification of a candidate the anchors already located;
/// otherwise the first stable instruction's step is scan-capable so the
/// search has somewhere to start.
///
/// Fails when `addr` is outside any known function, when the architecture
/// is unsupported and no anchors were found, or when the result would
/// contain nothing but cursor movement.
pub fn generate(db: &dyn CodeDatabase, addr: u64) -> Result<Signature> {
    let bounds = db
        .function_bounds(addr)
        .ok_or(SignatureError::NoFunction(addr))?;

    let name = db
        .name_at(bounds.start)
        .unwrap_or_else(|| format!("sub_{:x}", bounds.start));
    let mut signature = Signature::new(name);

    signature.steps.extend(function_strings(db, bounds.start)?);
    signature
        .steps
        .extend(function_code_references(db, bounds.start)?);

    let has_anchors = !signature.steps.is_empty();
    let classifier = Classifier::for_architecture(db.architecture());
    if classifier.is_supported() {
        let byte_steps = build_byte_steps(db, bounds, classifier, has_anchors)?;
        signature.steps.extend(byte_steps);
    } else if !has_anchors {
        return Err(SignatureError::UnsupportedArchitecture(db.architecture()));
    }

    if !signature.has_usable_steps() {
        return Err(SignatureError::EmptySignature(signature.name));
    }

    Ok(signature)
}
