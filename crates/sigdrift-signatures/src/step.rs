//! Pattern steps: the commands a persisted signature is made of.
//!
//! The matcher evaluates steps left to right, advancing a cursor as it
//! goes. Each step serializes as one whitespace-delimited command string:
//!
//! - `verify-bytes 60 00 00 00`
//! - `find-bytes --or 94 21 ff f0`
//! - `offset -12`
//! - `xrefs-to --or --function-start --bytes "4f 4b 00"`
//! - `xrefs-to --or --function-start --name "init_hw"`

use crate::{BytePattern, Result, SignatureError};
use std::fmt;
use std::str::FromStr;

/// Whether a step must hold at the cursor or merely offers an alternative
/// place for the search to continue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    Require,
    Alternative,
}

/// What an `xrefs-to` step anchors on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// The encoded bytes of a referenced string literal.
    Bytes(BytePattern),
    /// The symbolic name of a referenced call target.
    Name(String),
}

/// One step of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternStep {
    /// The exact pattern must appear at the cursor.
    VerifyBytes(BytePattern),
    /// Like [`PatternStep::VerifyBytes`], but the matcher may scan forward
    /// from the cursor until the pattern is found. Used only for the first
    /// contributed byte step, giving the search a flexible starting point.
    FindBytesOr(BytePattern),
    /// Advance (or, if negative, rewind) the cursor without a byte check.
    Offset(i64),
    /// The candidate must be referenced from the given anchor.
    XrefsTo {
        anchor: Anchor,
        /// Restrict reference sources to function entry addresses.
        function_start_only: bool,
        mode: StepMode,
    },
}

impl PatternStep {
    /// Returns true if this step moves the cursor without checking
    /// anything.
    pub fn is_offset(&self) -> bool {
        matches!(self, PatternStep::Offset(_))
    }

    /// Returns true if this step carries a byte pattern to match at the
    /// cursor.
    pub fn is_byte_step(&self) -> bool {
        matches!(
            self,
            PatternStep::VerifyBytes(_) | PatternStep::FindBytesOr(_)
        )
    }

    /// Returns true if this step anchors the signature on an external
    /// reference.
    pub fn is_anchor(&self) -> bool {
        matches!(self, PatternStep::XrefsTo { .. })
    }
}

impl fmt::Display for PatternStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternStep::VerifyBytes(pattern) => write!(f, "verify-bytes {}", pattern),
            PatternStep::FindBytesOr(pattern) => write!(f, "find-bytes --or {}", pattern),
            PatternStep::Offset(delta) => write!(f, "offset {}", delta),
            PatternStep::XrefsTo {
                anchor,
                function_start_only,
                mode,
            } => {
                write!(f, "xrefs-to")?;
                if *mode == StepMode::Alternative {
                    write!(f, " --or")?;
                }
                if *function_start_only {
                    write!(f, " --function-start")?;
                }
                match anchor {
                    Anchor::Bytes(pattern) => write!(f, " --bytes \"{}\"", pattern),
                    Anchor::Name(name) => write!(f, " --name \"{}\"", name),
                }
            }
        }
    }
}

impl FromStr for PatternStep {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (command, args) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match command {
            "verify-bytes" => Ok(PatternStep::VerifyBytes(BytePattern::parse(args)?)),
            "find-bytes" => {
                let rest = args
                    .trim_start()
                    .strip_prefix("--or")
                    .ok_or_else(|| SignatureError::InvalidStep(trimmed.to_string()))?;
                Ok(PatternStep::FindBytesOr(BytePattern::parse(rest)?))
            }
            "offset" => args
                .trim()
                .parse::<i64>()
                .map(PatternStep::Offset)
                .map_err(|_| SignatureError::InvalidStep(trimmed.to_string())),
            "xrefs-to" => parse_xrefs_to(args, trimmed),
            _ => Err(SignatureError::InvalidStep(trimmed.to_string())),
        }
    }
}

fn parse_xrefs_to(args: &str, full: &str) -> Result<PatternStep> {
    let mut mode = StepMode::Require;
    let mut function_start_only = false;
    let mut rest = args.trim_start();

    loop {
        if let Some(r) = rest.strip_prefix("--or") {
            mode = StepMode::Alternative;
            rest = r.trim_start();
        } else if let Some(r) = rest.strip_prefix("--function-start") {
            function_start_only = true;
            rest = r.trim_start();
        } else if let Some(r) = rest.strip_prefix("--bytes") {
            let value = unquote(r.trim_start())
                .ok_or_else(|| SignatureError::InvalidStep(full.to_string()))?;
            return Ok(PatternStep::XrefsTo {
                anchor: Anchor::Bytes(BytePattern::parse(value)?),
                function_start_only,
                mode,
            });
        } else if let Some(r) = rest.strip_prefix("--name") {
            let value = unquote(r.trim_start())
                .ok_or_else(|| SignatureError::InvalidStep(full.to_string()))?;
            return Ok(PatternStep::XrefsTo {
                anchor: Anchor::Name(value.to_string()),
                function_start_only,
                mode,
            });
        } else {
            return Err(SignatureError::InvalidStep(full.to_string()));
        }
    }
}

/// Strips one pair of surrounding double quotes.
fn unquote(s: &str) -> Option<&str> {
    let s = s.trim();
    s.strip_prefix('"')?.strip_suffix('"')
}

impl serde::Serialize for PatternStep {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for PatternStep {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_verify_bytes() {
        let step = PatternStep::VerifyBytes(BytePattern::from_bytes(&[0x60, 0x00, 0x00, 0x00]));
        assert_eq!(step.to_string(), "verify-bytes 60 00 00 00");
    }

    #[test]
    fn test_display_find_bytes() {
        let step = PatternStep::FindBytesOr(BytePattern::from_bytes(&[0x94, 0x21]));
        assert_eq!(step.to_string(), "find-bytes --or 94 21");
    }

    #[test]
    fn test_display_offset() {
        assert_eq!(PatternStep::Offset(4).to_string(), "offset 4");
        assert_eq!(PatternStep::Offset(-12).to_string(), "offset -12");
    }

    #[test]
    fn test_display_xrefs_to_bytes() {
        let step = PatternStep::XrefsTo {
            anchor: Anchor::Bytes(BytePattern::from_bytes(&[0x4f, 0x4b, 0x00])),
            function_start_only: true,
            mode: StepMode::Alternative,
        };
        assert_eq!(
            step.to_string(),
            "xrefs-to --or --function-start --bytes \"4f 4b 00\""
        );
    }

    #[test]
    fn test_display_xrefs_to_name() {
        let step = PatternStep::XrefsTo {
            anchor: Anchor::Name("init_hw".to_string()),
            function_start_only: true,
            mode: StepMode::Alternative,
        };
        assert_eq!(
            step.to_string(),
            "xrefs-to --or --function-start --name \"init_hw\""
        );
    }

    #[test]
    fn test_display_xrefs_to_require() {
        let step = PatternStep::XrefsTo {
            anchor: Anchor::Name("main".to_string()),
            function_start_only: false,
            mode: StepMode::Require,
        };
        assert_eq!(step.to_string(), "xrefs-to --name \"main\"");
    }

    #[test]
    fn test_parse_roundtrip() {
        let steps = vec![
            PatternStep::VerifyBytes(BytePattern::from_bytes(&[0x60, 0x00])),
            PatternStep::FindBytesOr(BytePattern::from_bytes(&[0x94, 0x21, 0xff, 0xf0])),
            PatternStep::Offset(4),
            PatternStep::Offset(-12),
            PatternStep::XrefsTo {
                anchor: Anchor::Bytes(BytePattern::from_bytes(&[0x4f, 0x4b, 0x00])),
                function_start_only: true,
                mode: StepMode::Alternative,
            },
            PatternStep::XrefsTo {
                anchor: Anchor::Name("init_hw".to_string()),
                function_start_only: false,
                mode: StepMode::Require,
            },
        ];

        for step in steps {
            let parsed: PatternStep = step.to_string().parse().unwrap();
            assert_eq!(parsed, step);
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert!("frobnicate 00".parse::<PatternStep>().is_err());
        assert!("offset twelve".parse::<PatternStep>().is_err());
        assert!("find-bytes 00".parse::<PatternStep>().is_err()); // missing --or
        assert!("xrefs-to --or".parse::<PatternStep>().is_err()); // no anchor
        assert!("xrefs-to --name unquoted".parse::<PatternStep>().is_err());
    }

    #[test]
    fn test_step_predicates() {
        assert!(PatternStep::Offset(4).is_offset());
        assert!(PatternStep::VerifyBytes(BytePattern::new()).is_byte_step());
        assert!(PatternStep::FindBytesOr(BytePattern::new()).is_byte_step());
        let anchor = PatternStep::XrefsTo {
            anchor: Anchor::Name("x".to_string()),
            function_start_only: true,
            mode: StepMode::Alternative,
        };
        assert!(anchor.is_anchor());
        assert!(!anchor.is_byte_step());
    }
}
