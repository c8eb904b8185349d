use std::process::ExitCode;

use clap::Parser;
use wd_coverage::cli::CoverageCli;
use wd_coverage::report;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = CoverageCli::parse();
    let summary = report::run(&cli.input.infile, &cli.options())?;
    print!("{summary}");
    Ok(())
}
