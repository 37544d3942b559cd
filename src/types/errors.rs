use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input text is not valid JSON, even after the bracket-wrap repair.
    #[error("Malformed JSON input and automatic repair failed: {reason}")]
    MalformedInput {
        reason: String
    },
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Output sink error: {0}")]
    Io(#[from] io::Error)
}

impl ConvertError {
    pub fn malformed_input(error: &serde_json::Error) -> Self {
        Self::MalformedInput { reason: error.to_string() }
    }
}
