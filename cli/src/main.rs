//! termbase CLI - glossary knowledge-base extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use termbase::{
    extract_context, DocumentSource, Error, JsonFormat, JsonSource, ParseOptions, Position,
    Termbase, TextSource,
};

#[derive(Parser)]
#[command(name = "termbase")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract glossary entries and context windows from structured documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the document into a JSON entry map
    Entries {
        /// Input document (.json for a serialized block array, anything
        /// else is read as text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Named section to parse (default "Metadata")
        #[arg(short, long, value_name = "NAME", conflicts_with = "whole_body")]
        section: Option<String>,

        /// Parse the whole document body instead of a named section
        #[arg(long)]
        whole_body: bool,

        /// Skip the description backfill pass
        #[arg(long)]
        no_backfill: bool,

        /// Render a Markdown glossary instead of JSON
        #[arg(long)]
        markdown: bool,

        /// Output compact JSON
        #[arg(long, conflicts_with = "markdown")]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract the context window around a cursor or selection
    Context {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Cursor block index
        #[arg(short, long, value_name = "N", conflicts_with_all = ["start", "end"])]
        block: Option<usize>,

        /// First block of a selection
        #[arg(long, value_name = "N", requires = "end")]
        start: Option<usize>,

        /// Last block of a selection
        #[arg(long, value_name = "N", requires = "start")]
        end: Option<usize>,

        /// Non-empty neighbors to include on each side
        #[arg(short, long, value_name = "K", default_value = "0")]
        limit: usize,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Entries {
            input,
            section,
            whole_body,
            no_backfill,
            markdown,
            compact,
            output,
        } => cmd_entries(
            &input,
            section,
            whole_body,
            no_backfill,
            markdown,
            compact,
            output.as_deref(),
        ),
        Commands::Context {
            input,
            block,
            start,
            end,
            limit,
            output,
        } => cmd_context(&input, block, start, end, limit, output.as_deref()),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load and normalize a document, picking the source by file extension.
fn load_blocks(input: &Path) -> Result<Vec<termbase::Block>, Box<dyn std::error::Error>> {
    let is_json = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let blocks = if is_json {
        JsonSource::from_path(input)?.blocks()?
    } else {
        TextSource::from_path(input)?.blocks()?
    };
    Ok(blocks)
}

fn cmd_entries(
    input: &Path,
    section: Option<String>,
    whole_body: bool,
    no_backfill: bool,
    markdown: bool,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut termbase = Termbase::new();
    if whole_body {
        termbase = termbase.whole_body();
    } else if let Some(name) = section {
        termbase = termbase.with_section(name);
    }
    if no_backfill {
        termbase = termbase.without_backfill();
    }

    let blocks = load_blocks(input)?;
    let result = match termbase.parse_blocks(blocks) {
        Ok(result) => result,
        Err(Error::SectionNotFound(name)) => {
            // The wrapper contract: report a structured error object
            // instead of failing loudly.
            let error = serde_json::json!({
                "error": format!("Section not found: {}", name),
            });
            println!("{}", error);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = if markdown {
        result.to_markdown()?
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        result.to_json(format)?
    };

    write_output(&rendered, output)?;
    Ok(())
}

fn cmd_context(
    input: &Path,
    block: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    limit: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let position = match (block, start, end) {
        (Some(block), _, _) => Position::cursor(block),
        (None, Some(start), Some(end)) => Position::selection(start, end),
        _ => return Err("provide --block N or --start N --end N".into()),
    };

    let blocks = load_blocks(input)?;
    let context = extract_context(&blocks, position, limit);

    write_output(&context, output)?;
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let blocks = load_blocks(input)?;

    let headings = blocks.iter().filter(|b| b.is_heading()).count();
    let images = blocks.iter().filter(|b| b.image.is_some()).count();

    let options = ParseOptions::new().whole_body();
    let entries = termbase::extract_entries(&blocks, &options)?;
    let categories = entries
        .values()
        .filter(|entry| !entry.category.is_empty())
        .map(|entry| entry.category.as_str())
        .collect::<std::collections::BTreeSet<_>>();

    println!("{}", "Document".green().bold());
    println!("  {} {}", "File:".dimmed(), input.display());
    println!("  {} {}", "Blocks:".dimmed(), blocks.len());
    println!("  {} {}", "Headings:".dimmed(), headings);
    println!("  {} {}", "Images:".dimmed(), images);
    println!();
    println!("{}", "Knowledge base".green().bold());
    println!("  {} {}", "Entries:".dimmed(), entries.len());
    println!("  {} {}", "Categories:".dimmed(), categories.len());
    for category in categories {
        println!("    {} {}", "-".dimmed(), category);
    }

    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
