//! Error types for parameter validation and metadata parsing.

use thiserror::Error;

/// Errors raised while validating parameters or parsing metadata.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A parameter is out of its valid range.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// A `WxH` size string could not be parsed.
    #[error("Invalid size '{0}', expected WIDTHxHEIGHT (e.g. 224x224)")]
    InvalidSize(String),

    /// Tile sheet header has a version this crate does not understand.
    #[error("Unsupported tile sheet header version {0}")]
    UnsupportedHeaderVersion(u32),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates an invalid parameter error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        SpecError::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}

/// Parses a `WIDTHxHEIGHT` size string such as `224x224`.
pub fn parse_size(s: &str) -> Result<[u32; 2], SpecError> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| SpecError::InvalidSize(s.to_string()))?;
    let w: u32 = w
        .trim()
        .parse()
        .map_err(|_| SpecError::InvalidSize(s.to_string()))?;
    let h: u32 = h
        .trim()
        .parse()
        .map_err(|_| SpecError::InvalidSize(s.to_string()))?;
    if w == 0 || h == 0 {
        return Err(SpecError::InvalidSize(s.to_string()));
    }
    Ok([w, h])
}
