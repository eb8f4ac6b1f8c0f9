//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Report missing keys as warnings instead of failing the run
    #[arg(short, long)]
    pub silent: bool,

    /// Root of the app tree to scan for translation calls
    #[arg(short, long, default_value = "./app")]
    pub path: PathBuf,

    /// Path to the locale document holding the translations
    #[arg(long, default_value = "./translations/en-us.yaml")]
    pub translation_path: PathBuf,
}
