//! adfmark - plain text to Atlassian Document Format
//!
//! Converts paragraphs, `- ` bullet lines, `1. ` ordered lines and
//! colon-terminated heading lines into an ADF document tree that can be
//! embedded verbatim as an issue tracker rich-text field.
//!
//! ```
//! let doc = adfmark::transpile("Notes:\n\n- one\n- two");
//! assert_eq!(doc.content.len(), 2);
//! ```

pub mod adf;
pub mod core;
pub mod error;

pub use adf::model::{Block, Document, ListItem, TextRun};
pub use adf::payload::{comment_body, description_field};
pub use adf::transpile::transpile;
pub use error::AdfError;
