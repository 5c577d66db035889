//! Command-line surface: argument types and command execution.
//!
//! Execution returns the rendered output instead of printing it so the whole
//! pipeline can be driven from tests.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use themefilter_core::config::{Config, OutputConfig};
use themefilter_core::FilterParser;

#[derive(Parser, Debug)]
#[command(name = "themefilter", about = "Parse, validate and strip theme search filters")]
pub struct Cli {
    /// Config file to layer over the defaults (default: ~/.config/themefilter/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Write debug logs to stderr (filtered by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Complete taxonomy:term filter for a bare term.
    Filter { term: String },
    /// Valid filter terms in the input, sorted by canonical filter.
    Terms { input: String },
    /// Sort bare terms by canonical filter, dropping unknown ones.
    Sort { terms: Vec<String> },
    /// Input with every filter token removed.
    Strip { input: String },
    /// Terms of the subject taxonomy.
    Subjects,
    /// Terms of any taxonomy.
    Taxonomy { name: String },
    /// Every filter token in the input with its validity.
    Parse { input: String },
}

/// One row of `parse` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParsedToken {
    pub taxonomy: String,
    pub term: String,
    pub valid: bool,
}

/// Load config, build the parser, and run `cli.command`.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let vocab = config.vocabulary().context("failed to build vocabulary")?;
    let parser = FilterParser::new(vocab).context("failed to build term index")?;
    let json = cli.json || config.output.json;
    execute(&parser, &config.output, json, &cli.command)
}

/// Run one command against an already-built parser.
pub fn execute(
    parser: &FilterParser,
    output: &OutputConfig,
    json: bool,
    command: &Command,
) -> anyhow::Result<String> {
    tracing::debug!(?command, json, "executing command");
    match command {
        Command::Filter { term } => render_one(json, &parser.get_filter(term)),
        Command::Terms { input } => {
            let terms = parser.sorted_filter_terms(input);
            if json {
                Ok(serde_json::to_string(&terms)?)
            } else {
                Ok(terms.join(output.separator.as_str()))
            }
        }
        Command::Sort { terms } => render_list(json, &parser.sort_filter_terms(terms.as_slice())),
        Command::Strip { input } => render_one(json, &parser.strip_filters(input)),
        Command::Subjects => render_list(json, parser.subjects()),
        Command::Taxonomy { name } => render_list(json, parser.terms_of(name)),
        Command::Parse { input } => {
            let rows: Vec<ParsedToken> = parser
                .filters(input)
                .into_iter()
                .map(|token| ParsedToken {
                    valid: parser.is_valid(&token),
                    taxonomy: token.taxonomy,
                    term: token.term,
                })
                .collect();
            if json {
                return Ok(serde_json::to_string(&rows)?);
            }
            Ok(rows
                .iter()
                .map(|r| {
                    let status = if r.valid { "valid" } else { "invalid" };
                    format!("{}:{}\t{}", r.taxonomy, r.term, status)
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

fn render_one(json: bool, value: &str) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(value.to_string())
    }
}

fn render_list(json: bool, values: &[String]) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(values)?)
    } else {
        Ok(values.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
