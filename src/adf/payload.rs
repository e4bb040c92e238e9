//! Issue tracker payloads
//!
//! Wraps a document in the request shapes that carry rich text:
//! - `doc`: the document itself
//! - `comment`: `{"body": doc}` for adding a comment
//! - `description`: `{"fields": {"description": doc}}` for creating or updating an issue
//!
//! The CLI goes through [`build`]. [`comment_body`] and [`description_field`]
//! are library entry points for callers that send the request themselves:
//!
//! ```
//! let body = adfmark::comment_body("Deployed to staging").unwrap();
//! assert_eq!(body["body"]["type"], "doc");
//!
//! let fields = adfmark::description_field("Steps:\n1. open the page");
//! assert_eq!(fields["fields"]["description"]["content"][0]["type"], "paragraph");
//! ```

use serde_json::{json, Value};

use crate::adf::model::Document;
use crate::adf::transpile::{transpile, trim_line};
use crate::error::AdfError;

/// Which request shape to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadKind {
    #[default]
    Doc,
    Comment,
    Description,
}

impl std::str::FromStr for PayloadKind {
    type Err = AdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doc" => Ok(PayloadKind::Doc),
            "comment" => Ok(PayloadKind::Comment),
            "description" => Ok(PayloadKind::Description),
            _ => Err(AdfError::UnknownPayloadKind(s.to_string())),
        }
    }
}

/// Wrap an already transpiled document
pub fn wrap(kind: PayloadKind, document: Document) -> Value {
    match kind {
        PayloadKind::Doc => json!(document),
        PayloadKind::Comment => json!({ "body": document }),
        PayloadKind::Description => json!({ "fields": { "description": document } }),
    }
}

/// Transpile `text` and wrap it.
///
/// Comments must carry some non-whitespace text; descriptions and bare
/// documents may be empty.
pub fn build(kind: PayloadKind, text: &str) -> Result<Value, AdfError> {
    if kind == PayloadKind::Comment && trim_line(text).is_empty() {
        return Err(AdfError::EmptyComment);
    }
    Ok(wrap(kind, transpile(text)))
}

/// Request body for adding a comment
pub fn comment_body(text: &str) -> Result<Value, AdfError> {
    build(PayloadKind::Comment, text)
}

/// `fields` object setting an issue description
pub fn description_field(text: &str) -> Value {
    wrap(PayloadKind::Description, transpile(text))
}
