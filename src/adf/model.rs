//! ADF document model
//!
//! The block tree produced by the transpiler. Every type serializes to the
//! exact Atlassian Document Format JSON shape, so a `Document` can be embedded
//! verbatim as a rich-text field value.

use serde::{Deserialize, Serialize};

/// ADF schema version emitted on every document
pub const ADF_VERSION: u32 = 1;

/// The only heading level the transpiler produces
pub const HEADING_LEVEL: u8 = 3;

/// Root node type marker (`"type": "doc"`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocKind {
    #[default]
    #[serde(rename = "doc")]
    Doc,
}

/// List item node type marker (`"type": "listItem"`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListItemKind {
    #[default]
    #[serde(rename = "listItem")]
    ListItem,
}

/// Inline node type marker (`"type": "text"`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextKind {
    #[default]
    #[serde(rename = "text")]
    Text,
}

/// The transpile result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,

    #[serde(rename = "type")]
    pub kind: DocKind,

    pub content: Vec<Block>,
}

impl Document {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            version: ADF_VERSION,
            kind: DocKind::Doc,
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Heading attributes (`"attrs": {"level": 3}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// Block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph {
        content: Vec<TextRun>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<TextRun>,
    },
    BulletList {
        content: Vec<ListItem>,
    },
    OrderedList {
        content: Vec<ListItem>,
    },
}

impl Block {
    /// Paragraph holding a single text run
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![TextRun::new(text)],
        }
    }

    /// Level-3 heading holding a single text run
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading {
            attrs: HeadingAttrs {
                level: HEADING_LEVEL,
            },
            content: vec![TextRun::new(text)],
        }
    }

    /// Items of a list block, `None` for paragraphs and headings
    pub fn items(&self) -> Option<&[ListItem]> {
        match self {
            Block::BulletList { content } | Block::OrderedList { content } => Some(content),
            Block::Paragraph { .. } | Block::Heading { .. } => None,
        }
    }

    pub(crate) fn items_mut(&mut self) -> Option<&mut Vec<ListItem>> {
        match self {
            Block::BulletList { content } | Block::OrderedList { content } => Some(content),
            Block::Paragraph { .. } | Block::Heading { .. } => None,
        }
    }

    /// Concatenated text of a paragraph or heading, `None` for lists
    pub fn text(&self) -> Option<String> {
        match self {
            Block::Paragraph { content } | Block::Heading { content, .. } => {
                Some(content.iter().map(|run| run.text.as_str()).collect())
            }
            Block::BulletList { .. } | Block::OrderedList { .. } => None,
        }
    }
}

/// Single entry of a bullet or ordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "type")]
    pub kind: ListItemKind,

    pub content: Vec<Block>,
}

impl ListItem {
    /// List item wrapping exactly one paragraph with one text run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: ListItemKind::ListItem,
            content: vec![Block::paragraph(text)],
        }
    }

    /// Item text with the marker already stripped
    pub fn text(&self) -> String {
        self.content.iter().filter_map(Block::text).collect()
    }
}

/// Literal run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(rename = "type")]
    pub kind: TextKind,

    pub text: String,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Text,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_shape() {
        let value = serde_json::to_value(Document::default()).unwrap();
        assert_eq!(value, json!({"version": 1, "type": "doc", "content": []}));
    }

    #[test]
    fn test_paragraph_shape() {
        let value = serde_json::to_value(Block::paragraph("hello")).unwrap();
        assert_eq!(
            value,
            json!({"type": "paragraph", "content": [{"type": "text", "text": "hello"}]})
        );
    }

    #[test]
    fn test_heading_shape() {
        let value = serde_json::to_value(Block::heading("Notes:")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "heading",
                "attrs": {"level": 3},
                "content": [{"type": "text", "text": "Notes:"}]
            })
        );
    }

    #[test]
    fn test_list_shapes() {
        let bullet = Block::BulletList {
            content: vec![ListItem::new("one")],
        };
        let ordered = Block::OrderedList {
            content: vec![ListItem::new("a")],
        };

        let item = json!({
            "type": "listItem",
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": "one"}]}]
        });
        assert_eq!(
            serde_json::to_value(bullet).unwrap(),
            json!({"type": "bulletList", "content": [item]})
        );
        assert_eq!(
            serde_json::to_value(ordered).unwrap()["type"],
            json!("orderedList")
        );
    }

    #[test]
    fn test_document_deserializes_from_adf() {
        let raw = r#"{
            "version": 1,
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 3}, "content": [{"type": "text", "text": "Steps:"}]},
                {"type": "orderedList", "content": [
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "build"}]}
                    ]}
                ]}
            ]
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(
            doc,
            Document::new(vec![
                Block::heading("Steps:"),
                Block::OrderedList {
                    content: vec![ListItem::new("build")]
                },
            ])
        );
    }

    #[test]
    fn test_rejects_unknown_node_type() {
        let raw = r#"{"version": 1, "type": "doc", "content": [{"type": "table", "content": []}]}"#;
        assert!(serde_json::from_str::<Document>(raw).is_err());
    }

    #[test]
    fn test_block_text_and_items() {
        assert_eq!(Block::paragraph("p").text(), Some("p".to_string()));
        assert!(Block::paragraph("p").items().is_none());

        let list = Block::BulletList {
            content: vec![ListItem::new("x"), ListItem::new("y")],
        };
        assert!(list.text().is_none());
        let texts: Vec<_> = list.items().unwrap().iter().map(ListItem::text).collect();
        assert_eq!(texts, vec!["x", "y"]);
    }
}
