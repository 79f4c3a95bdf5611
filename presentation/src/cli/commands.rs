//! CLI command definitions

use clap::{Parser, ValueEnum};
use query_form_domain::{OutputFormat, SubmitPolicy};
use std::path::PathBuf;

/// How the result region is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Plain text
    Text,
    /// HTML fragment as a page would receive it
    Html,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Html => OutputFormat::Html,
        }
    }
}

/// Handling of submits that overlap a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Send every submit; the last response to arrive is shown
    Unguarded,
    /// Ignore submits while a request is pending
    SingleFlight,
    /// Send every submit; only the newest one's response is shown
    LatestWins,
}

impl From<PolicyArg> for SubmitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Unguarded => SubmitPolicy::Unguarded,
            PolicyArg::SingleFlight => SubmitPolicy::SingleFlight,
            PolicyArg::LatestWins => SubmitPolicy::LatestWins,
        }
    }
}

/// CLI arguments for query-form
#[derive(Parser, Debug)]
#[command(name = "query-form")]
#[command(author, version, about = "Send a question to a JSON query API and show the answer")]
#[command(long_about = r#"
query-form posts a question to a query API and prints the JSON answer.

Each submit sends exactly one request:

  POST /api/query
  Content-Type: application/json

  {"question": "<your question>"}

A successful answer is printed as indented JSON. Any failure prints an
error banner followed by the error message.

Configuration files are loaded from (in priority order):
1. QUERY_FORM_* environment variables
2. --config <path>     Explicit config file
3. ./query-form.toml   Project-level config
4. ~/.config/query-form/config.toml   Global config

Example:
  query-form "猫とは何か"
  query-form --server https://data.example.jp --timeout 15 "東京の人口"
  query-form --interactive --policy latest-wins
"#)]
pub struct Cli {
    /// The question to submit (not required in interactive mode)
    pub question: Option<String>,

    /// Start interactive mode: every entered line is one submit
    #[arg(short, long)]
    pub interactive: bool,

    /// Base URL of the server hosting the query API
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Path of the query API
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Handling of submits that overlap a pending request
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the pending spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
