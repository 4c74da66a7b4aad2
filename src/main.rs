use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use pharma::start_repl;

const USAGE: &str = "Usage: pharma <configuration file>";

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file naming the database and the receipt counter
    config: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    start_repl(cli.config)
}
