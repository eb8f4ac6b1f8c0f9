//! Report formatting and printing utilities.
//!
//! Separate from core logic so the check pipeline can be driven as a
//! library without touching stdout.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{CheckOutcome, CheckResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the check report to stdout.
pub fn print(result: &CheckResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the check report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CheckResult, writer: &mut W) {
    print_summary(result, writer);

    match result.outcome {
        CheckOutcome::Pass => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "All translations present".green()
            );
        }
        CheckOutcome::Warn | CheckOutcome::Fail => print_missing(result, writer),
    }
}

fn print_summary<W: Write>(result: &CheckResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} source {} ({} with translation calls), found {} unique {}",
        result.stats.files_scanned,
        if result.stats.files_scanned == 1 {
            "file"
        } else {
            "files"
        },
        result.stats.files_with_keys,
        result.total_keys,
        if result.total_keys == 1 { "key" } else { "keys" },
    );
}

fn print_missing<W: Write>(result: &CheckResult, writer: &mut W) {
    let count = result.missing_keys.len();
    let (mark, severity) = match result.outcome {
        CheckOutcome::Warn => (FAILURE_MARK.yellow(), "warning:".bold().yellow()),
        _ => (FAILURE_MARK.red(), "error:".bold().red()),
    };

    let _ = writeln!(
        writer,
        "{} {} {} missing translation {}",
        mark,
        severity,
        count,
        if count == 1 { "key" } else { "keys" }
    );
    for key in &result.missing_keys {
        let _ = writeln!(writer, "  - {}", key);
    }
}
