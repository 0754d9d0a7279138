use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Branded value checks and small helpers from the command line")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a JSON value against a configured brand
    Check {
        /// Brand name from the [[brands]] tables
        brand: String,
        /// JSON value; bare words are treated as strings
        value: String,
        /// Override the rule's error message
        #[arg(long)]
        message: Option<String>,
    },
    /// Print one of the given values at random
    Pick { values: Vec<String> },
    /// Print the indices 0..n
    Times {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },
    /// Interpolate {name} placeholders with key=value pairs
    Render {
        template: String,
        #[arg(value_parser = parse_key_value)]
        replacements: Vec<(String, String)>,
        /// Fail when a placeholder has no replacement
        #[arg(long)]
        strict: bool,
    },
    /// Wait for the given number of milliseconds
    Delay {
        #[arg(allow_hyphen_values = true)]
        ms: String,
    },
    /// List configured brands
    Brands,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}
