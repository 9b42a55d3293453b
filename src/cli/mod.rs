//! CLI layer - Command-line interface

pub mod chart;
pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_history, format_settings, format_summary};
