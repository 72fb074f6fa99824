//! pycalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pycalc                          # Interactive keypad
//! pycalc --eval "2+3*4"           # Print 14 and exit
//! pycalc --eval "5/0" --json      # Machine-readable result
//! pycalc --log-file calc.log -vv  # Log every key press
//! ```

use clap::Parser;
use pycalc::{
    cli::{Cli, EvalReport},
    config::CalcConfig,
    core::evaluate,
    error::AppResult,
    logging::{self, LogTarget},
    tui,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config();

    match cli.eval.as_deref() {
        Some(expression) => run_eval(&config, expression, cli.json),
        None => {
            logging::init(&config, LogTarget::Interactive)?;
            tui::run(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_eval(config: &CalcConfig, expression: &str, json: bool) -> AppResult<ExitCode> {
    logging::init(config, LogTarget::Stderr)?;

    let result = evaluate(expression);
    if let Some(err) = result.error() {
        tracing::warn!(expression, error = %err, "evaluation failed");
    }

    if json {
        let report = EvalReport::new(expression, &result);
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{result}");
    }

    Ok(if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
