//! The signature document.
//!
//! This is the artifact the external matcher consumes: a name, a kind tag,
//! and an ordered step list. Key order (`name`, `kind`, `steps`) is part of
//! the persisted format — serde emits fields in declaration order, and the
//! document is meant to be read and edited by hand before being fed back
//! into a search.

use crate::{PatternStep, Result};
use serde::{Deserialize, Serialize};

/// What a signature identifies. Only whole functions today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    #[default]
    Function,
}

/// A named, ordered set of pattern steps locating one function across
/// binary revisions.
///
/// Field declaration order is the serialization order. Do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Display identifier of the target function.
    pub name: String,
    /// Kind tag.
    pub kind: SignatureKind,
    /// Steps, evaluated left to right by the matcher.
    pub steps: Vec<PatternStep>,
}

impl Signature {
    /// Create an empty signature for a named function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SignatureKind::Function,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn push(&mut self, step: PatternStep) {
        self.steps.push(step);
    }

    /// Returns true if any step checks bytes or anchors, rather than only
    /// moving the cursor. A signature without one would match everywhere.
    pub fn has_usable_steps(&self) -> bool {
        self.steps.iter().any(|step| !step.is_offset())
    }

    /// Serialize to the persisted document text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a persisted document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
