//! Command line argument parsing for the smish CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// smish - SMS spam detection service
#[derive(Parser, Debug, Clone)]
#[command(name = "smish")]
#[command(about = "SMS spam detection service and CLI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SmishArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

impl SmishArgs {
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
    /// Run the HTTP prediction service
    Serve(ServeArgs),

    /// Classify a single message
    Predict(PredictArgs),

    /// Train model artifacts from a labeled corpus
    Train(TrainArgs),

    /// Load the artifacts and run one probe prediction
    Warmup(WarmupArgs),
}

/// Arguments for the HTTP service
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Model artifact directory (searched before the default locations)
    #[arg(short, long, env = "SMISH_MODELS_DIR", value_name = "DIR")]
    pub models_dir: Option<PathBuf>,
}

/// Arguments for one-shot prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// The message text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Model artifact directory (searched before the default locations)
    #[arg(short, long, env = "SMISH_MODELS_DIR", value_name = "DIR")]
    pub models_dir: Option<PathBuf>,
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus file, one `label<TAB>text` record per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Directory to write the artifacts into
    #[arg(short, long, default_value = "models", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Vocabulary cap for the vectorizer
    #[arg(long, default_value = "3000")]
    pub max_features: usize,

    /// Seed for the train/test shuffle
    #[arg(long, default_value = "2")]
    pub seed: u64,
}

/// Arguments for warmup
#[derive(Parser, Debug, Clone)]
pub struct WarmupArgs {
    /// Model artifact directory (searched before the default locations)
    #[arg(short, long, env = "SMISH_MODELS_DIR", value_name = "DIR")]
    pub models_dir: Option<PathBuf>,
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
