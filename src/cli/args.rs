//! Command line argument parsing for the Veracity CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Veracity - a probabilistic text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "veracity")]
#[command(about = "A probabilistic bag-of-words text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VeracityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VeracityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a corpus file and classify a document
    Classify(ClassifyArgs),

    /// Train a model from a corpus file and show its statistics
    Stats(StatsArgs),
}

/// Arguments for classifying a document
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the corpus file (JSON object: label -> list of documents)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Document text to classify (reads stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the document to classify from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file (JSON object: label -> list of documents)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Include per-label token totals
    #[arg(short, long)]
    pub detailed: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
