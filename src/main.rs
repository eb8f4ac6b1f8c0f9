use std::process::ExitCode;

use clap::Parser;
use intlcheck::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match intlcheck::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
