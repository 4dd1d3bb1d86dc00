//! String literals as recognized by the host database.

/// String encodings the host database can report.
///
/// The set mirrors the classification disassemblers commonly apply to
/// string data: plain NUL-terminated bytes, length-prefixed variants, and
/// wide-character forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringKind {
    /// Plain single-byte characters, NUL-terminated.
    C,
    /// Single-byte length prefix.
    Pascal,
    /// Two-byte length prefix.
    Len2,
    /// Wide (two-byte) characters, NUL-terminated.
    Unicode,
    /// Four-byte length prefix.
    Len4,
    /// Wide characters, two-byte length prefix.
    ULen2,
    /// Wide characters, four-byte length prefix.
    ULen4,
}

impl StringKind {
    /// Returns the name of this string kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Pascal => "Pascal",
            Self::Len2 => "LEN2",
            Self::Unicode => "Unicode",
            Self::Len4 => "LEN4",
            Self::ULen2 => "ULEN2",
            Self::ULen4 => "ULEN4",
        }
    }
}

/// A string literal at a fixed address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    /// Address where the literal starts.
    pub address: u64,
    /// Encoding the host recognized.
    pub kind: StringKind,
    /// Raw content bytes, without terminator or length prefix.
    pub bytes: Vec<u8>,
}

impl StringLiteral {
    /// Creates a new string literal.
    pub fn new(address: u64, kind: StringKind, bytes: Vec<u8>) -> Self {
        Self {
            address,
            kind,
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(StringKind::C.name(), "C");
        assert_eq!(StringKind::ULen4.name(), "ULEN4");
    }

    #[test]
    fn test_literal_create() {
        let lit = StringLiteral::new(0x2000, StringKind::C, b"OK".to_vec());
        assert_eq!(lit.address, 0x2000);
        assert_eq!(lit.bytes, b"OK");
    }
}
