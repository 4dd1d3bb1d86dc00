//! Per-architecture instruction stability classification.
//!
//! An instruction is unstable when its encoding embeds an address or
//! displacement that moves between builds: literal-pool loads, memory
//! accesses through relocated data, branches and calls. Everything else
//! encodes only opcode and register operands and survives a rebuild
//! byte-for-byte.

use sigdrift_core::{Architecture, Instruction};

/// Whether an instruction's encoding survives a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Unstable,
}

/// ARM mnemonics whose encoding embeds an address or displacement.
const ARM_UNSTABLE: &[&str] = &["ldr", "str", "bl", "b", "blx", "bx", "bxj"];

/// Architecture-specific instruction classifier.
///
/// A closed set of variants, one per supported architecture, plus an
/// explicit [`Classifier::Unsupported`] for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    Ppc32,
    Arm,
    Unsupported,
}

impl Classifier {
    /// Returns the classifier for an architecture.
    pub fn for_architecture(arch: Architecture) -> Self {
        match arch {
            Architecture::Ppc32 => Self::Ppc32,
            Architecture::Arm => Self::Arm,
            Architecture::Unknown => Self::Unsupported,
        }
    }

    /// Returns true if byte-step generation is available.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Classifies one decoded instruction, or `None` when the architecture
    /// is unsupported. Total over any mnemonic the host can produce.
    pub fn classify(&self, insn: &Instruction) -> Option<Stability> {
        // Hosts disagree on mnemonic case; normalize before comparing.
        let mnemonic = insn.mnemonic.to_ascii_lowercase();
        match self {
            Self::Ppc32 => Some(classify_ppc32(&mnemonic)),
            Self::Arm => Some(classify_arm(&mnemonic)),
            Self::Unsupported => None,
        }
    }
}

/// `lis` loads the high half of a relocated address, `lwz` loads through
/// one, and the whole `b` family encodes a displacement.
fn classify_ppc32(mnemonic: &str) -> Stability {
    if matches!(mnemonic, "lis" | "lwz" | "bl") || mnemonic.starts_with('b') {
        Stability::Unstable
    } else {
        Stability::Stable
    }
}

fn classify_arm(mnemonic: &str) -> Stability {
    if ARM_UNSTABLE.contains(&mnemonic) {
        Stability::Unstable
    } else {
        Stability::Stable
    }
}
