//! Input reading
//!
//! Reads the text to transpile from a file or stdin. Oversized input is
//! rejected and non-UTF-8 bytes are decoded lossily.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::AdfError;

/// Default maximum input size in bytes (16 MB)
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// Path argument that selects stdin
pub const STDIN_PATH: &str = "-";

/// Where the text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> InputSource<'a> {
    /// `None` and `-` select stdin
    pub fn from_arg(path: Option<&'a Path>) -> Self {
        match path {
            Some(p) if p != Path::new(STDIN_PATH) => InputSource::File(p),
            _ => InputSource::Stdin,
        }
    }

    fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(p) => p.display().to_string(),
        }
    }
}

/// Read input text with the default size limit
pub fn read_input(path: Option<&Path>) -> Result<String, AdfError> {
    read_input_with_limit(InputSource::from_arg(path), DEFAULT_MAX_INPUT_SIZE)
}

/// Read input text, failing when it exceeds `limit` bytes
pub fn read_input_with_limit(source: InputSource<'_>, limit: u64) -> Result<String, AdfError> {
    let label = source.label();

    let bytes = match source {
        InputSource::File(path) => {
            let metadata = fs::metadata(path).map_err(|e| AdfError::io(&label, e))?;
            check_size(&label, metadata.len(), limit)?;
            fs::read(path).map_err(|e| AdfError::io(&label, e))?
        }
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .take(limit + 1)
                .read_to_end(&mut buffer)
                .map_err(|e| AdfError::io(&label, e))?;
            check_size(&label, buffer.len() as u64, limit)?;
            buffer
        }
    };

    debug!(input = %label, bytes = bytes.len(), "read input");
    Ok(decode(&label, bytes))
}

fn check_size(label: &str, size: u64, limit: u64) -> Result<(), AdfError> {
    if size > limit {
        return Err(AdfError::InputTooLarge {
            path: label.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}

/// UTF-8 decode, replacing invalid sequences
pub fn decode(label: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(input = %label, "input is not valid UTF-8, using lossy conversion");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("-"))),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_arg(Some(Path::new("notes.txt"))),
            InputSource::File(Path::new("notes.txt"))
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "- one\n- two\n").unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "- one\n- two\n");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/adfmark/input.txt")));
        assert!(matches!(result, Err(AdfError::Io { .. })));
    }

    #[test]
    fn test_size_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'a'; 32]).unwrap();

        let result = read_input_with_limit(InputSource::File(file.path()), 16);
        assert!(matches!(
            result,
            Err(AdfError::InputTooLarge {
                size: 32,
                limit: 16,
                ..
            })
        ));
        assert!(read_input_with_limit(InputSource::File(file.path()), 32).is_ok());
    }

    #[test]
    fn test_decode_lossy() {
        let text = decode("test", vec![b'o', b'k', 0xff]);
        assert_eq!(text, "ok\u{fffd}");
    }
}
