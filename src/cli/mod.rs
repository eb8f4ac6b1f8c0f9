use anyhow::Result;

mod args;
mod exit_status;
mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::core::{CheckOptions, CheckOutcome, check};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let options = CheckOptions {
        silent: args.silent,
        project_path: args.path,
        translation_path: args.translation_path,
    };

    let result = check(&options)?;
    report::print(&result);

    Ok(match result.outcome {
        CheckOutcome::Pass | CheckOutcome::Warn => ExitStatus::Success,
        CheckOutcome::Fail => ExitStatus::Failure,
    })
}
