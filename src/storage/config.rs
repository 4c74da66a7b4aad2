use std::{fmt::Display, fs, path::Path, path::PathBuf};

use log::debug;

use crate::error::{Error, Result};

use super::write_atomic;

pub const DATABASE_FILE_KEY: &str = "db";
pub const RECEIPT_COUNT_KEY: &str = "receipt";

fn missing(key: &str) -> Error {
    Error::ConfigFormat(format!("missing the `{key}` entry"))
}

/// Session configuration read from a `key=value` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db: PathBuf,
    pub receipt: u32,
}

impl Config {
    pub fn new(db: impl Into<PathBuf>, receipt: u32) -> Self {
        Self {
            db: db.into(),
            receipt,
        }
    }

    /// Parses configuration text.
    ///
    /// Both `db` and `receipt` must be present; they may come in any order and the
    /// last occurrence of a key wins. Unknown keys are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut db = None;
        let mut receipt = None;

        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.strip_suffix('\r').unwrap_or(value);

            match key {
                DATABASE_FILE_KEY => db = Some(PathBuf::from(value)),
                RECEIPT_COUNT_KEY => {
                    let count = value.trim().parse::<u32>().map_err(|_| {
                        Error::ConfigFormat(format!("invalid receipt count `{value}`"))
                    })?;
                    receipt = Some(count);
                }
                _ => debug!("ignoring config key `{key}`"),
            }
        }

        Ok(Self {
            db: db.ok_or_else(|| missing(DATABASE_FILE_KEY))?,
            receipt: receipt.ok_or_else(|| missing(RECEIPT_COUNT_KEY))?,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!("loaded configuration from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, self.to_string().as_bytes())
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{DATABASE_FILE_KEY}={}", self.db.display())?;
        writeln!(f, "{RECEIPT_COUNT_KEY}={}", self.receipt)
    }
}
