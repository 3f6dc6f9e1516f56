use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use csvsift::cli::Cli;
use csvsift::logging;
use tracing::debug;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from here.
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(kind) = err.downcast_ref::<csvsift::Error>().map(csvsift::Error::kind) {
                debug!(kind, "command failed");
            }
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let output = csvsift::run(cli)?;

    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{}", output).and_then(|()| stdout.flush()) {
        // A closed pipe (`csvsift ... | head`) is not an error.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write results to stdout"),
    }
}
