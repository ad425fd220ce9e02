//! CLI argument definitions for the compendium tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use compendium_ingest::IngestMode;
use compendium_model::Basis;

#[derive(Parser)]
#[command(
    name = "compendium",
    version,
    about = "Compendium - Basis-aware nutrition and herb knowledge engine",
    long_about = "Ingest published nutrition/herb sheets into a basis-aware content model.\n\n\
                  Resolves field text per evidentiary basis (research, book, general),\n\
                  condenses or enriches it for display, and classifies herb records\n\
                  into therapeutic categories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a sheet and print a per-category summary.
    Sheet(SheetArgs),

    /// Resolve one field of one item and print its display text.
    Lookup(LookupArgs),

    /// Search resolved content across the whole model.
    Search(SearchArgs),

    /// List the therapeutic categories the herb classifier knows.
    Categories,
}

#[derive(Args)]
pub struct SheetArgs {
    /// Path to the CSV sheet.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Row layout of the sheet.
    #[arg(long = "mode", value_enum, default_value = "tall")]
    pub mode: ModeArg,

    /// Write the full content model as pretty-printed JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Path to the CSV sheet.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Row layout of the sheet.
    #[arg(long = "mode", value_enum, default_value = "tall")]
    pub mode: ModeArg,

    /// Item name, exactly as it appears in the sheet.
    #[arg(long = "item")]
    pub item: String,

    /// Field (column) name to resolve.
    #[arg(long = "field")]
    pub field: String,

    /// Basis to resolve at (all, research, book, gen).
    #[arg(long = "basis", default_value = "all")]
    pub basis: Basis,

    /// Render the detailed view (citations, ratings, links) instead of the
    /// concise one.
    #[arg(long = "detailed")]
    pub detailed: bool,

    /// Keep citation shorthand unexpanded in the detailed view.
    #[arg(long = "raw-citations")]
    pub raw_citations: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Path to the CSV sheet.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Row layout of the sheet.
    #[arg(long = "mode", value_enum, default_value = "tall")]
    pub mode: ModeArg,

    /// Term to search for (two characters minimum).
    #[arg(long = "term")]
    pub term: String,

    /// Basis the searched content is resolved at.
    #[arg(long = "basis", default_value = "all")]
    pub basis: Basis,

    /// Restrict the search to one category.
    #[arg(long = "category")]
    pub category: Option<String>,
}

/// CLI sheet-layout choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// One row per (item, basis).
    Tall,
    /// One row per item, categories assigned by the classifier.
    Flattened,
}

impl From<ModeArg> for IngestMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Tall => IngestMode::Tall,
            ModeArg::Flattened => IngestMode::Flattened,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
