//! CLI command definitions

use crate::cli::chart::MAX_DIMENSION;
use clap::{value_parser, ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wtrack")]
#[command(about = "Personal weight tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start tracking in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Unit system (metric, imperial)
        #[arg(short, long, default_value = "metric")]
        unit: String,
    },

    /// Log a weight measurement
    Add {
        /// Weight, optionally with a unit (e.g., 72.5, 72.5kg, 160lbs)
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Date of the measurement (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry by its number in the history
    Remove {
        /// Entry number as shown by `wtrack history` (1 = newest)
        number: usize,
    },

    /// List all entries, newest first
    History,

    /// Show current weight and statistics
    Summary,

    /// Plot the weight trend
    Graph {
        /// Time window (7d, 30d, all)
        #[arg(short, long, default_value = "30d")]
        window: String,

        /// Write an SVG image to this file instead of plotting in the terminal
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,

        /// Canvas width (pixels for SVG, columns for the terminal)
        #[arg(long, value_parser = value_parser!(u32).range(1..=MAX_DIMENSION))]
        width: Option<u32>,

        /// Canvas height (pixels for SVG, rows for the terminal)
        #[arg(long, value_parser = value_parser!(u32).range(1..=MAX_DIMENSION))]
        height: Option<u32>,
    },

    /// View or modify profile settings
    Settings {
        /// Setting to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// List all settings
        #[arg(short, long)]
        list: bool,
    },
}
