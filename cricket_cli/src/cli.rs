//! Command-line interface definition for the `cricket` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use cricket_core::config::DEFAULT_DATA_FILE;
use cricket_core::logging::Verbosity;
use cricket_core::record::Attribute;
use cricket_core::store::Direction;

/// cricket - Manage a cricket catalog file from the terminal
#[derive(Debug, Parser)]
#[command(name = "cricket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file to operate on
    #[arg(short, long, global = true, value_name = "FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List records grouped by size
    List {
        /// Only show one size group (小, 中 or 大)
        #[arg(long)]
        size: Option<String>,
    },

    /// Print every record with this name as JSON
    Show { name: String },

    /// Append a new record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        breed: String,
        #[arg(long, default_value = "")]
        level: String,
        #[arg(long, default_value = "")]
        size: String,
        /// Attribute as NAME=VALUE; VALUE is a category (低 中 高 超 神),
        /// a number or a range such as 4-6
        #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
        attrs: Vec<(Attribute, String)>,
    },

    /// Remove every record with this name
    Remove { name: String },

    /// Move a record one place up or down
    Move {
        name: String,
        #[arg(value_enum)]
        direction: MoveDirection,
    },

    /// Show the category of an attribute value
    Classify { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

/// Parse `NAME=VALUE` for `--attr`.
pub fn parse_attr(raw: &str) -> Result<(Attribute, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let attribute = Attribute::from_label(name.trim()).ok_or_else(|| {
        let known: Vec<_> = Attribute::ALL.iter().map(|a| a.label()).collect();
        format!("unknown attribute '{}', expected one of {}", name, known.join(" "))
    })?;
    Ok((attribute, value.trim().to_string()))
}
