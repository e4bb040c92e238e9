//! ADF module - Plain text to Atlassian Document Format
//!
//! This module provides:
//! - The document model (Document, Block, ListItem, TextRun)
//! - The line-based transpiler
//! - Request payload shapes for issue tracker rich-text fields
//! - Markup outline and statistics

pub mod model;
pub mod outline;
pub mod payload;
pub mod transpile;
