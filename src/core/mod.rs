//! Core module - Plumbing shared by the CLI commands
//!
//! This module provides:
//! - Input reading from files or stdin
//! - Rendering functions for different output formats
//! - Logging setup

pub mod input;
pub mod logging;
pub mod render;
