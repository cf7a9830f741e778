//! Crate-level error types.

use std::fmt;

/// Errors produced by the atelier crate.
#[derive(Debug)]
pub enum GalleryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// The artwork data file is not a valid JSON array of records.
    DataParse(serde_json::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to download the artwork data file.
    Fetch(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataParse(e) => write!(f, "artwork data error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::DataParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        Self::DataParse(e)
    }
}
