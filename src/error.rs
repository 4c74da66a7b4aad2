use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, mutating or persisting the warehouse state
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open configuration file {}: {source}", path.display())]
    ConfigOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigFormat(String),

    #[error("cannot open database file {}: {source}", path.display())]
    DatabaseOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot load database {}: {source}", path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("cannot open order file {}: {source}", path.display())]
    OrderOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("item {0} not found")]
    NotFound(i32),

    #[error("format error: {0}")]
    Format(String),

    #[error("database holds more than {0} items")]
    Capacity(usize),

    #[error("receipt counter is exhausted at {0}")]
    ReceiptOverflow(u32),

    #[error("cannot save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
