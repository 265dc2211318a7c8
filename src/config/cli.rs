use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::color::ColorChoice;
use crate::report::Format;

/// CLI arguments parsed from command line.
#[derive(Debug, Parser)]
#[command(
    name = "sprint-select",
    version,
    about = "Select the backlog tasks that maximize sprint priority within a story-point budget"
)]
pub struct CliArgs {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file [default: sprint-select.toml if present]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backlog's targetStoryPoints.
    #[arg(long, global = true, value_name = "N")]
    pub capacity: Option<usize>,

    /// Largest DP table, in cells, the optimizer may allocate.
    #[arg(long, global = true, value_name = "N")]
    pub max_cells: Option<usize>,

    /// Report format: text or json.
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_format)]
    pub format: Option<Format>,

    /// When to color output: auto, always or never.
    #[arg(long, global = true, value_name = "WHEN", value_parser = parse_color)]
    pub color: Option<ColorChoice>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// sprint-select subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Select tasks from a backlog file that maximize the sprint's priority
    /// while meeting the target story points.
    #[command(name = "select-from", visible_alias = "selectFrom")]
    SelectFrom {
        /// Backlog JSON file (`-` reads stdin).
        path: PathBuf,
    },
    /// Write a default sprint-select.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Parse CLI arguments from an iterator.
///
/// The first item is the program name.
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

fn parse_format(s: &str) -> Result<Format, String> {
    Format::parse(s).ok_or_else(|| format!("invalid format '{}' (expected text or json)", s))
}

fn parse_color(s: &str) -> Result<ColorChoice, String> {
    ColorChoice::parse(s)
        .ok_or_else(|| format!("invalid color '{}' (expected auto, always or never)", s))
}
