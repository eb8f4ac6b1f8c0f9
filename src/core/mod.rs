//! Check pipeline: extraction, scanning, locale loading, resolution.
//!
//! The pipeline is a strict sequence run by [`check::check`]:
//! validate paths, walk the project tree extracting translation keys,
//! load the locale document, and resolve every collected key against it.

pub mod check;
pub mod extract;
pub mod resolve;
pub mod scan;
pub mod translations;

pub use check::{CheckOptions, CheckOutcome, CheckResult, check};
pub use extract::{FileKind, extract_keys};
pub use resolve::key_exists;
pub use scan::{ScanOutcome, ScanStats, collect_keys};
pub use translations::load_translations;
