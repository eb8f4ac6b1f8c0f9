//! Translation-call extraction via pattern matching.
//!
//! Extraction is regex-based, not syntax-aware: call sites with unusual
//! formatting (multi-line string arguments, concatenation, computed keys)
//! are not matched, and produce no diagnostics.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// File kinds eligible for extraction, recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Handlebars templates (`.hbs`).
    Markup,
    /// JavaScript sources (`.js`).
    Script,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("hbs") => Some(Self::Markup),
            Some("js") => Some(Self::Script),
            _ => None,
        }
    }
}

// Quote characters are matched symmetrically via one alternation per quote
// kind; the regex crate has no backreferences.
static MUSTACHE_T_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{t\s+(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)"#).unwrap()
});

static SUBEXPR_T_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(t\s+(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)"#).unwrap()
});

// `intl.t(...)` with an optional dotted receiver chain (`this.intl.t`,
// `this.owner.intl.t`). A trailing options object is matched but discarded.
static INTL_T_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:[A-Za-z_$][\w$]*\.)*intl\.t\(\s*(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)\s*(?:,\s*\{[^}]*\})?\s*\)"#,
    )
    .unwrap()
});

/// Extract every translation key referenced in `content`.
///
/// Markup files are matched against the mustache form `{{t "key" ...}}`
/// and the subexpression form `(t "key" ...)`; script files against
/// `intl.t('key'[, { ... }])`. Literals are trimmed, and literals that are
/// empty after trimming are dropped silently.
pub fn extract_keys(content: &str, kind: FileKind) -> Vec<String> {
    let mut keys = Vec::new();

    match kind {
        FileKind::Markup => {
            push_matches(&MUSTACHE_T_REGEX, content, &mut keys);
            push_matches(&SUBEXPR_T_REGEX, content, &mut keys);
        }
        FileKind::Script => push_matches(&INTL_T_REGEX, content, &mut keys),
    }

    keys
}

fn push_matches(regex: &Regex, content: &str, keys: &mut Vec<String>) {
    for caps in regex.captures_iter(content) {
        let literal = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().trim());
        if let Some(key) = literal
            && !key.is_empty()
        {
            keys.push(key.to_string());
        }
    }
}
