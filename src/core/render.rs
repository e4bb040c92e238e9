//! Renderer module
//!
//! Renders documents and statistics to the output formats: json, jsonl, md, raw

use colored::Colorize;
use serde::Serialize;

use crate::adf::model::Document;
use crate::adf::outline::{to_markup, Stats};
use crate::error::AdfError;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Jsonl,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = AdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(AdfError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for documents
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a document to a string
    pub fn render(&self, document: &Document) -> String {
        match self.config.format {
            OutputFormat::Json => self.to_json(document),
            OutputFormat::Jsonl => self.render_jsonl(document),
            OutputFormat::Markdown => to_markup(document),
            OutputFormat::Raw => format!("{:#?}", document),
        }
    }

    /// Serialize any value as JSON, honoring `pretty`
    pub fn to_json<T: Serialize>(&self, value: &T) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render as JSON Lines (one top-level block per line)
    fn render_jsonl(&self, document: &Document) -> String {
        document
            .content
            .iter()
            .map(|block| self.to_json(block))
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render statistics: JSON for json/jsonl, a table otherwise
    pub fn render_stats(&self, stats: &Stats) -> String {
        match self.config.format {
            OutputFormat::Json | OutputFormat::Jsonl => self.to_json(stats),
            OutputFormat::Markdown | OutputFormat::Raw => stats_table(stats),
        }
    }
}

fn stats_table(stats: &Stats) -> String {
    let rows = [
        ("Paragraphs", stats.paragraphs),
        ("Headings", stats.headings),
        ("Bullet lists", stats.bullet_lists),
        ("Ordered lists", stats.ordered_lists),
        ("List items", stats.list_items),
        ("Characters", stats.characters),
    ];

    let mut output = format!("{}\n", "Document Statistics".bold());
    for (label, value) in rows {
        output.push_str(&format!("  {:<14} {}\n", label, value.to_string().cyan()));
    }
    output
}
