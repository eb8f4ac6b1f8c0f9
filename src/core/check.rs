//! The check pipeline: validate paths, scan, resolve, classify.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::core::{ScanStats, collect_keys, key_exists, load_translations};

/// Run configuration, passed explicitly so the pipeline stays testable
/// without a process boundary.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Downgrade missing keys from failure to warning.
    pub silent: bool,
    /// Root of the app tree to scan.
    pub project_path: PathBuf,
    /// Path to the locale document.
    pub translation_path: PathBuf,
}

/// Terminal outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every referenced key is present.
    Pass,
    /// Keys are missing, downgraded by tolerant mode.
    Warn,
    /// Keys are missing.
    Fail,
}

#[derive(Debug)]
pub struct CheckResult {
    pub stats: ScanStats,
    /// Unique keys collected across the tree.
    pub total_keys: usize,
    /// Keys absent from the locale document, sorted.
    pub missing_keys: Vec<String>,
    pub outcome: CheckOutcome,
}

/// Run the full pipeline.
///
/// Fatal conditions (missing paths, unreadable files, malformed locale
/// document) surface as `Err`; missing keys are a validation result
/// carried in the returned [`CheckResult`], never an `Err`.
pub fn check(options: &CheckOptions) -> Result<CheckResult> {
    if !options.project_path.exists() {
        bail!(
            "Project path '{}' does not exist.\n\
             Hint: point --path at your app directory.",
            options.project_path.display()
        );
    }
    if !options.translation_path.exists() {
        bail!(
            "Translation file '{}' does not exist.\n\
             Hint: point --translation-path at your locale document.",
            options.translation_path.display()
        );
    }

    let scanned = collect_keys(&options.project_path)?;
    let translations = load_translations(&options.translation_path)?;

    let mut missing_keys: Vec<String> = scanned
        .keys
        .iter()
        .filter(|key| !key_exists(key, &translations))
        .cloned()
        .collect();
    // Walk order is unspecified; sort so repeated runs report identically.
    missing_keys.sort();

    let outcome = if missing_keys.is_empty() {
        CheckOutcome::Pass
    } else if options.silent {
        CheckOutcome::Warn
    } else {
        CheckOutcome::Fail
    };

    Ok(CheckResult {
        stats: scanned.stats,
        total_keys: scanned.keys.len(),
        missing_keys,
        outcome,
    })
}
