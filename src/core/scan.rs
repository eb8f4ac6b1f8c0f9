//! Project-tree walking and key aggregation.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::extract::{FileKind, extract_keys};

/// Counters accumulated during the walk. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Eligible files visited.
    pub files_scanned: usize,
    /// Eligible files that contributed at least one key.
    pub files_with_keys: usize,
}

/// Keys and counters produced by walking a project tree.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub keys: HashSet<String>,
    pub stats: ScanStats,
}

/// Recursively walk `root`, extracting translation keys from every
/// eligible file into a deduplicated set.
///
/// Traversal order is implementation-defined. An unreadable entry or file
/// aborts the walk with an error.
pub fn collect_keys(root: &Path) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("Cannot access path under {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(kind) = FileKind::from_path(path) else {
            continue;
        };

        outcome.stats.files_scanned += 1;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;

        let keys = extract_keys(&content, kind);
        if !keys.is_empty() {
            outcome.stats.files_with_keys += 1;
            outcome.keys.extend(keys);
        }
    }

    Ok(outcome)
}
