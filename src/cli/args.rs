//! Command line argument parsing for the Tribune CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tribune - text analytics for French political tweets
#[derive(Parser, Debug, Clone)]
#[command(name = "tribune")]
#[command(about = "Text analytics and authorship attribution for French political tweets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TribuneArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TribuneArgs {
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
    /// Show per-speaker descriptive statistics
    Stats(StatsArgs),

    /// Write word-cloud term weights for one speaker
    Wordcloud(WordcloudArgs),

    /// Write the comparative-vocabulary HTML for two speakers
    Compare(CompareArgs),

    /// Train and evaluate the authorship classifier
    Train(TrainArgs),
}

/// Filters shared by every command that reads the dataset.
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// Path to the labeled tweet CSV
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Keep only tweets created at or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// Keep only these speakers (repeatable)
    #[arg(long = "speaker", value_name = "NAME")]
    pub speakers: Vec<String>,
}

/// Normalization options shared by the text-consuming commands.
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Keep surface forms instead of lemmas
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Extra stopwords added to the built-in French list (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub extra_stopwords: Vec<String>,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for the wordcloud command
#[derive(Parser, Debug, Clone)]
pub struct WordcloudArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Speaker to build the cloud for
    #[arg(value_name = "SPEAKER")]
    pub speaker: String,

    /// Output JSON path
    #[arg(short, long, value_name = "FILE", default_value = "wordcloud.json")]
    pub output: PathBuf,

    /// Number of terms to keep
    #[arg(long, default_value = "30")]
    pub max_terms: usize,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}

/// Arguments for the compare command
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// First speaker
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second speaker
    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Output HTML path
    #[arg(short, long, value_name = "FILE", default_value = "vocabulary.html")]
    pub output: PathBuf,

    /// Drop terms with fewer total occurrences
    #[arg(long, default_value = "10")]
    pub min_frequency: usize,

    /// Keep only the most frequent terms overall
    #[arg(long, default_value = "4000")]
    pub max_terms: usize,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Fraction of records held out for evaluation
    #[arg(long, default_value = "0.3")]
    pub test_ratio: f64,

    /// Seed for the train/test split
    #[arg(long, default_value = "123")]
    pub split_seed: u64,

    /// Fit a single default pipeline instead of searching
    #[arg(long)]
    pub no_search: bool,

    /// Number of random parameter draws
    #[arg(long, default_value = "20")]
    pub search_iters: usize,

    /// Number of cross-validation folds
    #[arg(long, default_value = "5")]
    pub cv_folds: usize,

    /// Seed for candidate sampling and fold shuffling
    #[arg(long, default_value = "5439676")]
    pub search_seed: u64,

    /// Unlabeled CSV to predict after training
    #[arg(long, value_name = "FILE")]
    pub mystery: Option<PathBuf>,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}
