//! Intlcheck - translation key checker for ember-intl
//!
//! Intlcheck is a CLI tool and library for verifying that every translation
//! key referenced in an Ember app's source tree exists in its locale
//! document. It scans Handlebars templates and JavaScript sources for
//! translation-lookup call sites and resolves each key against the YAML
//! translation tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, report rendering, exit status)
//! - `core`: Check pipeline (extraction, scanning, locale loading, resolution)

pub mod cli;
pub mod core;
