use clap::Parser;
use log::info;
use std::process::ExitCode;
use video_catalog::cli::{Cli, report_error, run};
use video_catalog::init;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) => {
            info!("Program exited normally ({} videos)", summary.count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
