//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with every round and the final answer
    Full,
    /// Only the synthesized final answer
    Answer,
    /// The complete result as pretty-printed JSON
    Json,
}

/// CLI arguments for ai-council
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about = "AI Council - Multiple LLMs debate a question and deliver one answer")]
#[command(long_about = r#"
AI Council fans a question out to several LLM backends in parallel, circulates
the answers for critique over one or more rounds, and synthesizes a single
final answer.

Two debate modes are available:
  fixed rounds (default)    run exactly --rounds rounds, then synthesize
  consensus-seeking (-c)    stop as soon as the models converge, capped
                            at --max-rounds

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/council/config.toml   Global config

Example:
  council "What's the best way to handle errors in Rust?"
  council -m gpt-4o-mini -m claude-3-5-sonnet -c "Is a linked list ever the right choice?"
  council --recommend "Prove that sqrt(2) is irrational"
  council --interactive
"#)]
pub struct Cli {
    /// The question to put before the council (not required with
    /// --interactive, --list-models, --recommend or --show-config)
    pub question: Option<String>,

    /// Models to seat on the council (can be specified multiple times;
    /// default: every registered model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Number of debate rounds in fixed-round mode [default: 2]
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Debate until the models agree instead of running a fixed round count
    #[arg(short, long)]
    pub consensus: bool,

    /// Round cap in consensus-seeking mode [default: 5]
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Pairwise similarity at which two answers count as agreeing [default: 0.85]
    #[arg(long, value_name = "RATIO")]
    pub similarity_threshold: Option<f64>,

    /// Fraction of agreeing pairs required to declare consensus [default: 0.8]
    #[arg(long, value_name = "RATIO")]
    pub min_agreement: Option<f64>,

    /// Model that writes the final synthesis [default: first participant]
    #[arg(long, value_name = "MODEL")]
    pub synthesizer: Option<String>,

    /// Timeout per model call, in seconds [default: 120]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Classify the question and suggest suitable models, then exit
    #[arg(long)]
    pub recommend: bool,

    /// List registered models and their status, then exit
    #[arg(long)]
    pub list_models: bool,

    /// Print the merged configuration and any issues, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Start the interactive council REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
