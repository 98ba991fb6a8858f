//! Command-line options and the resolved configuration handed to the UI.

use crate::sources;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_TOOL: &str = "zellij";

/// What to do when one of the two loaders fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LoadFailurePolicy {
    /// Leave the picker and show the error.
    #[default]
    Abort,
    /// Keep the picker open without the failed source.
    Disable,
}

#[derive(Debug, Parser)]
#[command(
    name = "zpick",
    about = "Pick a zellij session to start or attach to",
    version
)]
pub struct Args {
    /// Multiplexer binary to drive
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Directory holding saved layouts (default: $XDG_CONFIG_HOME/<tool>/layouts)
    #[arg(long, value_name = "DIR")]
    pub layouts_dir: Option<PathBuf>,

    /// Behaviour when listing layouts or sessions fails
    #[arg(long, value_enum, default_value_t)]
    pub on_load_error: LoadFailurePolicy,

    /// Write a log to this file
    #[arg(long, value_name = "PATH", env = "ZPICK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Print the chosen command instead of running it
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tool: String,
    pub layouts_dir: PathBuf,
    pub on_load_error: LoadFailurePolicy,
    pub print_only: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let layouts_dir = args
            .layouts_dir
            .clone()
            .unwrap_or_else(|| sources::default_layouts_dir(&args.tool));
        Config {
            tool: args.tool.clone(),
            layouts_dir,
            on_load_error: args.on_load_error,
            print_only: args.print,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tool: DEFAULT_TOOL.to_string(),
            layouts_dir: sources::default_layouts_dir(DEFAULT_TOOL),
            on_load_error: LoadFailurePolicy::default(),
            print_only: false,
        }
    }
}
