//! Architecture identification and properties.

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Architecture {
    /// PowerPC 32-bit
    Ppc32,
    /// ARM 32-bit
    Arm,
    /// Unknown architecture
    Unknown,
}

impl Architecture {
    /// Maps a host processor identifier to an architecture.
    pub fn from_processor_name(name: &str) -> Self {
        match name {
            "PPC" => Self::Ppc32,
            "ARM" => Self::Arm,
            _ => Self::Unknown,
        }
    }

    /// Returns the fixed instruction width in bytes, if the architecture
    /// has one. Variable-width architectures return `None`.
    pub fn instruction_width(&self) -> Option<usize> {
        match self {
            Self::Ppc32 => Some(4),
            Self::Arm | Self::Unknown => None,
        }
    }

    /// Returns the name of this architecture.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ppc32 => "ppc32",
            Self::Arm => "arm",
            Self::Unknown => "unknown",
        }
    }
}

/// Byte order of the target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    Little,
    Big,
}
