pub mod commands;
mod input;
pub mod session;

pub use commands::Command;
pub use input::Input;
pub use session::{Session, State};

use std::{path::PathBuf, process::ExitCode};

use log::error;

use crate::error::Error;

/// Line shown to the user when a session cannot start
fn startup_failure(config_path: &std::path::Path, e: &Error) -> String {
    match e {
        Error::DatabaseOpen { path, .. } | Error::Database { path, .. } => {
            format!("Error loading database from file {}", path.display())
        }
        _ => format!(
            "Error loading configuration from file {}.",
            config_path.display()
        ),
    }
}

/// Starts a warehouse session on stdin/stdout
pub fn start_repl(config_path: PathBuf) -> ExitCode {
    let mut session = match Session::open(config_path.clone()) {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            println!("{}", startup_failure(&config_path, &e));
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    match session.run(stdin.lock(), std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("session aborted: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    #[test]
    fn startup_failures_name_the_right_file() {
        let config = Path::new("pharma.cfg");
        let io = || std::io::Error::from(std::io::ErrorKind::NotFound);

        let e = Error::ConfigOpen {
            path: config.to_path_buf(),
            source: io(),
        };
        assert_eq!(
            startup_failure(config, &e),
            "Error loading configuration from file pharma.cfg."
        );

        let e = Error::ConfigFormat("invalid receipt count `x`".into());
        assert_eq!(
            startup_failure(config, &e),
            "Error loading configuration from file pharma.cfg."
        );

        let e = Error::DatabaseOpen {
            path: "items.csv".into(),
            source: io(),
        };
        assert_eq!(
            startup_failure(config, &e),
            "Error loading database from file items.csv"
        );

        let e = Error::Database {
            path: "items.csv".into(),
            source: Box::new(Error::Capacity(100)),
        };
        assert_eq!(
            startup_failure(config, &e),
            "Error loading database from file items.csv"
        );
    }
}
