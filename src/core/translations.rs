//! Locale document loading.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_yaml::Value;

/// Load the locale document into memory.
///
/// An empty or whitespace-only file parses to `Value::Null`, which the
/// resolver treats as an empty mapping. Malformed YAML is fatal.
pub fn load_translations(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse translation file: {}", path.display()))
}
