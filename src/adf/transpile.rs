//! Text to ADF transpiler
//!
//! Classifies each line of plain text and folds the classifications into a
//! block tree:
//! - blank line: closes any open list
//! - `- item`: bullet list item
//! - `12. item`: ordered list item
//! - `Title:` followed by a blank line (or end of input): level-3 heading
//! - anything else: paragraph, closes any open list
//!
//! Consecutive items of the same kind share one list node. A blank line or a
//! change of marker kind starts a new list node. Headings leave the open list
//! untouched; the blank line that makes a line a heading is what closes it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::adf::model::{Block, Document, ListItem};

/// Bullet marker, matched against the trimmed line
const BULLET_MARKER: &str = "- ";

/// Ordered marker: ASCII digits, a period and one marker-whitespace character
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[[\s\x{FEFF}]&&[^\x{85}]]").expect("Invalid ORDERED_MARKER regex")
});

/// Whitespace for trimming and blank-line checks: Unicode White_Space plus
/// the byte order mark, minus NEL.
pub fn is_marker_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim marker whitespace from both ends
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_marker_whitespace)
}

/// Kind of list a list item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    fn empty_block(self) -> Block {
        match self {
            ListKind::Bullet => Block::BulletList {
                content: Vec::new(),
            },
            ListKind::Ordered => Block::OrderedList {
                content: Vec::new(),
            },
        }
    }
}

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    /// Item text with the marker stripped
    Item(ListKind, &'a str),
    /// Trimmed heading text
    Heading(&'a str),
    /// Untrimmed line
    Paragraph(&'a str),
}

/// Classify `line` given the line that follows it (`""` at end of input).
///
/// Rules are tried in a fixed order and the first match wins.
pub fn classify<'a>(line: &'a str, next: &str) -> LineClass<'a> {
    let trimmed = trim_line(line);

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(text) = trimmed.strip_prefix(BULLET_MARKER) {
        return LineClass::Item(ListKind::Bullet, text);
    }

    if let Some(marker) = ORDERED_MARKER.find(trimmed) {
        return LineClass::Item(ListKind::Ordered, &trimmed[marker.end()..]);
    }

    if trimmed.ends_with(':') && trim_line(next).is_empty() {
        return LineClass::Heading(trimmed);
    }

    LineClass::Paragraph(line)
}

/// The list node currently accepting items, by position in the root content
#[derive(Debug, Clone, Copy)]
struct OpenList {
    kind: ListKind,
    index: usize,
}

/// Convert plain text into an ADF document.
///
/// Total over all inputs: empty or blank-only text yields an empty document.
pub fn transpile(text: &str) -> Document {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut content: Vec<Block> = Vec::new();
    let mut open: Option<OpenList> = None;

    for (i, line) in lines.iter().enumerate() {
        let next = lines.get(i + 1).copied().unwrap_or("");
        let class = classify(line, next);
        trace!(line = i + 1, ?class, "classified line");

        match class {
            LineClass::Blank => open = None,
            LineClass::Item(kind, text) => append_item(&mut content, &mut open, kind, text),
            LineClass::Heading(text) => content.push(Block::heading(text)),
            LineClass::Paragraph(text) => {
                open = None;
                content.push(Block::paragraph(text));
            }
        }
    }

    debug!(lines = lines.len(), blocks = content.len(), "transpiled text");
    Document::new(content)
}

/// Append an item to the open list, starting a new list node when none is
/// open or the open one has a different kind.
fn append_item(content: &mut Vec<Block>, open: &mut Option<OpenList>, kind: ListKind, text: &str) {
    let index = match *open {
        Some(list) if list.kind == kind => list.index,
        _ => {
            content.push(kind.empty_block());
            let index = content.len() - 1;
            *open = Some(OpenList { kind, index });
            index
        }
    };

    if let Some(items) = content[index].items_mut() {
        items.push(ListItem::new(text));
    }
}
