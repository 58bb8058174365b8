use thiserror::Error;

/// Failures at the outer conversion boundary.
///
/// Parsing and assembling never fail; only encoding the produced blocks can.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to encode blocks as JSON: {source}")]
    JsonEncodeError {
        #[from]
        source: serde_json::Error,
    },
}
