#![forbid(unsafe_code)]
use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use cronrange::RuleSet;
use std::process::{Command, ExitCode};

/// Environment override for the evaluated instant, RFC 3339 formatted.
const TEST_TIME_VAR: &str = "CRONRANGE_TEST_TIME";

const USAGE_ERROR: u8 = 2;

/// Checks whether the current time falls inside a cronrange expression.
///
/// Exits 0 when the expression matches (and the command, if any, succeeded),
/// 1 when it doesn't match or the command failed, 2 on usage or parse errors.
#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
struct Cli {
    /// Cronrange expression, e.g. "17:20-21:35 1-5 * *"
    expression: String,

    /// Command with arguments to run when the expression matches
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let rules = match RuleSet::new(&cli.expression) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error parsing cronrange: {e}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let now = match current_time() {
        Ok(now) => now,
        Err(e) => {
            eprintln!("Error parsing test time: {e:#}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if !rules.matches(&now) {
        return ExitCode::from(1);
    }

    if cli.command.is_empty() {
        return ExitCode::SUCCESS;
    }

    run_command(&cli.command)
}

/// Current local time, or the instant injected via `CRONRANGE_TEST_TIME`.
fn current_time() -> anyhow::Result<DateTime<FixedOffset>> {
    let test_time = std::env::var(TEST_TIME_VAR).unwrap_or_default();
    if test_time.is_empty() {
        return Ok(Local::now().fixed_offset());
    }

    DateTime::parse_from_rfc3339(&test_time).with_context(|| format!("can't parse {TEST_TIME_VAR}='{test_time}'"))
}

/// Runs the command with inherited stdio, propagating its exit code when
/// available.
fn run_command(command: &[String]) -> ExitCode {
    match Command::new(&command[0]).args(&command[1..]).status() {
        Ok(status) => match status.code() {
            Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
            None => ExitCode::from(1),
        },
        Err(e) => {
            eprintln!("Error executing command: {e}");
            ExitCode::from(1)
        }
    }
}
