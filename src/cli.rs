use clap::{Parser, Subcommand};
use golinter_jsonschema::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "golinter-jsonschema",
    version,
    about = "Lint jsonschema struct tags in Go sources"
)]
pub struct Cli {
    /// Only log errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a Go package directory or a single .go file
    Lint {
        /// Directory or file to lint
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Apply suggested fixes in place
        #[arg(long)]
        fix: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "jsonschema/unknown-key")
        rule_id: String,
    },
}
