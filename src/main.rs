//! adfmark - plain text to Atlassian Document Format
//!
//! adfmark provides:
//! - Conversion of paragraphs, bullet/ordered lines and colon headings to ADF
//! - Issue tracker payload shapes (comment body, description field)
//! - Statistics and a markup outline of a document
//! - Unified output formats (json/jsonl/md/raw)

use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();
    adfmark::core::logging::init_logging(cli.verbose, cli.quiet);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
