//! CLI argument definitions for the deck explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use projectk_cli::render::OutputFormat;
use projectk_model::View;

#[derive(Parser)]
#[command(
    name = "projectk",
    version,
    about = "Project K deck explorer - browse card data, charts and correlations",
    long_about = "Explore the Project K card dataset from the terminal.\n\n\
                  Pages mirror the explorer navigation: home, explore, per-deck,\n\
                  compare and correlate. Output is text tables and charts, or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// CSV file with the card dataset (default: settings, then demodecks.csv).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Settings file to use instead of the per-user one.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format for pages and listings.
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Fail chart sections for decks without an assigned colour.
    #[arg(long = "strict-colors", global = true)]
    pub strict_colors: bool,

    /// Rows of the dataset shown on the explore page.
    #[arg(long = "preview-rows", value_name = "N", global = true)]
    pub preview_rows: Option<usize>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Render one page of the explorer.
    View(ViewArgs),

    /// List the navigation options.
    Views,

    /// List the decks in the dataset with card counts and colours.
    Decks,

    /// Inspect or create the settings file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct ViewArgs {
    /// Page to render, by option name or label.
    #[arg(value_name = "VIEW", default_value = "home")]
    pub view: View,

    /// Deck for the per-deck page (default: first deck in the dataset).
    #[arg(long = "deck", value_name = "NAME")]
    pub deck: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as TOML.
    Show,

    /// Print the settings file path.
    Path,

    /// Write a settings file with default values.
    Init {
        /// Replace an existing file.
        #[arg(long = "force")]
        force: bool,
    },
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
