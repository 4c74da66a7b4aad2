pub mod category;
pub mod config;
pub mod inventory;
pub mod item;
pub mod record;

pub use category::Category;
pub use config::Config;
pub use inventory::{Inventory, CAPACITY};
pub use item::Item;

use std::{fs, io::Write, path::Path};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replaces the contents of `path` with `contents`.
///
/// The data goes to a temporary file next to the target which is then renamed
/// over it, so an interrupted save leaves the previous file intact.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let save_err = |source: std::io::Error| Error::Save {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(save_err)?;
    file.write_all(contents).map_err(save_err)?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(save_err)?;
    }
    file.as_file().sync_all().map_err(save_err)?;
    file.persist(path).map_err(|e| save_err(e.error))?;

    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
