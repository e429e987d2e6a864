//! CLI argument parsing for hostprobe

use clap::{Parser, ValueEnum};

/// Output format for the machine-facts record
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `name: value` lines
    Text,
    /// Compact JSON object for machine parsing (default)
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hostprobe")]
#[command(version)]
#[command(about = "Probe host CPU and kernel facts for a remote build service", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
