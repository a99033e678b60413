//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrina crate.
///
/// Construction-time failures (`Config`) abort a build attempt and are
/// surfaced to the host. Per-mesh failures (`GeometryResolution`) fail
/// only that mesh; the rest of the scene still builds. Asset failures
/// (`AssetLoad`) degrade the affected material to color-only.
#[derive(Debug)]
pub enum Error {
    /// Malformed or unparseable descriptor document.
    Config(String),
    /// Unknown geometry kind or procedural helper.
    GeometryResolution(String),
    /// Texture fetch/decode failure.
    AssetLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::GeometryResolution(msg) => {
                write!(f, "geometry resolution error: {msg}")
            }
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
