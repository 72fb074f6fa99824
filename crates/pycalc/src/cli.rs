//! Command-line arguments using clap

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{CalcConfig, Verbosity};
use crate::core::EvaluationResult;

/// pycalc: a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pycalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Evaluate an expression once, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Print the evaluation as JSON
    #[arg(long, requires = "eval")]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Ignore mouse clicks
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Builds the runtime configuration from the flags
    #[must_use]
    pub fn config(&self) -> CalcConfig {
        let mut config = CalcConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_mouse(!self.no_mouse);
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }
        config
    }
}

/// One-shot evaluation outcome for `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// The input expression
    pub expression: String,
    /// What the display would show
    pub display: String,
    /// Whether evaluation succeeded
    pub ok: bool,
    /// The failure cause, if any
    pub error: Option<String>,
}

impl EvalReport {
    /// Builds a report for `expression`
    #[must_use]
    pub fn new(expression: &str, result: &EvaluationResult) -> Self {
        Self {
            expression: expression.to_string(),
            display: result.text().to_string(),
            ok: !result.is_error(),
            error: result.error().map(ToString::to_string),
        }
    }
}
