//! Dotted key-path resolution against the locale tree.

use serde_yaml::Value;

/// Check whether a dot-delimited key path resolves to a node in the
/// locale document.
///
/// A dot always denotes nesting; there is no escaping. Presence is tested,
/// not truthiness: a key whose leaf value is an explicit `null` exists.
/// An empty document (`Value::Null`) behaves as an empty mapping.
pub fn key_exists(key: &str, doc: &Value) -> bool {
    let mut node = doc;

    for segment in key.split('.') {
        if !node.is_mapping() {
            return false;
        }
        match node.get(segment) {
            Some(next) => node = next,
            None => return false,
        }
    }

    true
}
