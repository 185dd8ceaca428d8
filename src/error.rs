//! Crate-level error types.

use std::fmt;

/// Errors produced by the xrgrip crate.
#[derive(Debug)]
pub enum XrGripError {
    /// The host runtime failed to deliver a usable model sub-tree.
    AssetLoad(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for XrGripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for XrGripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for XrGripError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
