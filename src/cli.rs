//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use adfmark::adf::outline::{load_document, stats};
use adfmark::adf::payload::{self, PayloadKind};
use adfmark::core::input::read_input;
use adfmark::core::render::{OutputFormat, RenderConfig, Renderer};
use adfmark::transpile;

/// adfmark - convert plain text into Atlassian Document Format.
#[derive(Parser, Debug)]
#[command(name = "adfmark")]
#[command(
    author,
    version,
    about,
    long_about = r#"adfmark turns loosely structured plain text into an ADF document tree.

Recognized line forms:
- blank line: ends any open list
- "- item": bullet list item
- "1. item": ordered list item (the number itself is ignored)
- "Title:" followed by a blank line or end of input: level-3 heading
- anything else: paragraph

Output formats:
- json: a single JSON document (default)
- jsonl: one top-level block per line
- md: the document rendered back to plain-text markup
- raw: debug dump (unstable; intended for debugging)

Examples:
    adfmark convert notes.txt
    echo "- one" | adfmark convert --pretty
    adfmark payload notes.txt --kind comment
    adfmark stats notes.txt --format md
"#
)]
pub struct Cli {
    /// Output format (json/jsonl/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "json",
        env = "ADFMARK_FORMAT",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- json (default)\n\
- jsonl\n\
- md (markdown)\n\
- raw\n\n\
Can also be set with the ADFMARK_FORMAT environment variable."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        env = "ADFMARK_PRETTY",
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output in human-readable tables. Useful when piping to files."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. ADFMARK_LOG overrides the level\n\
with a tracing filter directive, e.g. ADFMARK_LOG=trace."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text into an ADF document.
    #[command(long_about = "Read FILE (or stdin when FILE is omitted or '-'), transpile it and\n\
print the document in the selected format.\n\n\
Examples:\n\
  adfmark convert notes.txt\n\
  adfmark convert - --format jsonl < notes.txt\n")]
    Convert {
        /// Input text file ('-' or omitted for stdin).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Wrap the converted document in an issue tracker request shape.
    #[command(long_about = "Transpile FILE (or stdin) and wrap the document for an issue tracker\n\
rich-text field. Output is always JSON.\n\n\
Kinds:\n\
- doc: the bare document (default)\n\
- comment: {\"body\": doc}\n\
- description: {\"fields\": {\"description\": doc}}\n\n\
Example:\n\
  adfmark payload review.txt --kind comment\n")]
    Payload {
        /// Input text file ('-' or omitted for stdin).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Request shape (doc/comment/description).
        #[arg(long, default_value = "doc", value_name = "KIND")]
        kind: String,
    },

    /// Count blocks, list items and characters of the converted document.
    Stats {
        /// Input text file ('-' or omitted for stdin).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Render a stored ADF JSON document back to plain-text markup.
    Outline {
        /// ADF JSON file ('-' for stdin).
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse()?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let renderer = Renderer::with_config(render_config);
    debug!(?render_config, "rendering");

    let output = match cli.command {
        Commands::Convert { input } => {
            let text = read_input(input.as_deref())?;
            renderer.render(&transpile(&text))
        }

        Commands::Payload { input, kind } => {
            let kind: PayloadKind = kind.parse()?;
            let text = read_input(input.as_deref())?;
            renderer.to_json(&payload::build(kind, &text)?)
        }

        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            renderer.render_stats(&stats(&transpile(&text)))
        }

        Commands::Outline { input } => {
            let json = read_input(Some(input.as_path()))?;
            let document = load_document(&json)
                .with_context(|| format!("loading {}", input.display()))?;
            Renderer::new(OutputFormat::Markdown).render(&document)
        }
    };

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
