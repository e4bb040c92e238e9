//! Document outline and statistics
//!
//! Renders a document back to the plain-text dialect the transpiler reads,
//! and counts nodes by kind.

use serde::{Deserialize, Serialize};

use crate::adf::model::{Block, Document, ListItem};
use crate::adf::transpile::trim_line;
use crate::error::AdfError;

/// Node counts for a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub paragraphs: usize,
    pub headings: usize,
    pub bullet_lists: usize,
    pub ordered_lists: usize,
    pub list_items: usize,
    /// Characters across all text runs
    pub characters: usize,
}

/// Parse a stored ADF document
pub fn load_document(json: &str) -> Result<Document, AdfError> {
    Ok(serde_json::from_str(json)?)
}

/// Render a document as markup.
///
/// Top-level blocks are separated by one blank line, except after a
/// paragraph ending in `:`, which is followed by a single newline so it does
/// not read back as a heading. A colon paragraph as the last block still
/// reads back as a heading. Ordered items are renumbered from 1 within each
/// list.
pub fn to_markup(document: &Document) -> String {
    let mut output = String::new();

    for (i, block) in document.content.iter().enumerate() {
        if i > 0 {
            let joined_to_previous = matches!(
                &document.content[i - 1],
                previous @ Block::Paragraph { .. } if is_colon_paragraph(previous)
            );
            output.push_str(if joined_to_previous { "\n" } else { "\n\n" });
        }
        output.push_str(&block_markup(block));
    }

    output
}

fn is_colon_paragraph(block: &Block) -> bool {
    block
        .text()
        .is_some_and(|text| trim_line(&text).ends_with(':'))
}

fn block_markup(block: &Block) -> String {
    match block {
        Block::Paragraph { .. } | Block::Heading { .. } => block.text().unwrap_or_default(),
        Block::BulletList { content } => content
            .iter()
            .map(|item| format!("- {}", item.text()))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::OrderedList { content } => content
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.text()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Count nodes and characters
pub fn stats(document: &Document) -> Stats {
    let mut stats = Stats::default();

    for block in &document.content {
        match block {
            Block::Paragraph { .. } => stats.paragraphs += 1,
            Block::Heading { .. } => stats.headings += 1,
            Block::BulletList { .. } => stats.bullet_lists += 1,
            Block::OrderedList { .. } => stats.ordered_lists += 1,
        }

        match block.items() {
            Some(items) => {
                stats.list_items += items.len();
                stats.characters += items
                    .iter()
                    .map(ListItem::text)
                    .map(|t| t.chars().count())
                    .sum::<usize>();
            }
            None => stats.characters += block.text().unwrap_or_default().chars().count(),
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::transpile::transpile;

    #[test]
    fn test_to_markup() {
        let doc = transpile("Plan:\n\n3. first\n9. second\n- loose\nclosing words");
        assert_eq!(
            to_markup(&doc),
            "Plan:\n\n1. first\n2. second\n\n- loose\n\nclosing words"
        );
    }

    #[test]
    fn test_markup_round_trip() {
        let text = "Summary:\n\n- alpha\n- beta\n\n1. one\n2. two\n\nplain paragraph";
        let doc = transpile(text);
        assert_eq!(to_markup(&doc), text);
        assert_eq!(transpile(&to_markup(&doc)), doc);
    }

    #[test]
    fn test_markup_round_trip_colon_paragraph() {
        let doc = transpile("Steps:\n1. build\n2. ship\n\nNote: \nsee docs");
        assert_eq!(
            to_markup(&doc),
            "Steps:\n1. build\n2. ship\n\nNote: \nsee docs"
        );
        assert_eq!(transpile(&to_markup(&doc)), doc);
    }

    #[test]
    fn test_trailing_colon_paragraph_reads_back_as_heading() {
        let doc = Document::new(vec![Block::paragraph("Closing:")]);
        assert_eq!(
            transpile(&to_markup(&doc)).content,
            vec![Block::heading("Closing:")]
        );
    }

    #[test]
    fn test_markup_of_empty_document() {
        assert_eq!(to_markup(&Document::default()), "");
    }

    #[test]
    fn test_stats() {
        let doc = transpile("Notes:\n\n- ab\n- c\n\n1. d\nxyz");
        let stats = stats(&doc);
        assert_eq!(
            stats,
            Stats {
                paragraphs: 1,
                headings: 1,
                bullet_lists: 1,
                ordered_lists: 1,
                list_items: 3,
                characters: 6 + 2 + 1 + 1 + 3,
            }
        );
    }

    #[test]
    fn test_load_document() {
        let doc = transpile("- a\n- b");
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(load_document(&json).unwrap(), doc);
        assert!(matches!(
            load_document("{\"version\": 1}"),
            Err(AdfError::InvalidDocument(_))
        ));
    }
}
