//! Error types for the input, rendering and payload layers.
//!
//! Transpiling itself never fails; these cover everything around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdfError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input {path} is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { path: String, size: u64, limit: u64 },

    #[error("unknown format: {0} (expected json, jsonl, md or raw)")]
    UnknownFormat(String),

    #[error("unknown payload kind: {0} (expected doc, comment or description)")]
    UnknownPayloadKind(String),

    #[error("comment text must not be empty")]
    EmptyComment,

    #[error("invalid ADF document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

impl AdfError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AdfError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message() {
        let err = AdfError::io(
            "notes.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "failed to read notes.txt: no such file");
    }

    #[test]
    fn test_invalid_document_from_serde() {
        let err: AdfError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid ADF document"));
    }
}
