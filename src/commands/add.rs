use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::fs::ObjectStore;
use crate::object::blob::ExtendedBlob;

/// Reads `file` as a blob object and returns its hash followed by a newline.
///
/// The object is only written to the objects folder if `write` is set.
pub fn add(file: &Path, write: bool, config: &Config) -> Result<Vec<u8>> {
    let path = path_clean::clean(file);
    let ExtendedBlob { blob, path } =
        ExtendedBlob::try_from_path(path).context("could not create blob from file")?;
    log::debug!(
        "blob for {:?}: type {}, size {}",
        path,
        blob.kind,
        blob.size()
    );

    let hash = if write {
        ObjectStore::from_config(config)
            .write(&blob)
            .context(format!("could not write blob for {:?}", path))?
    } else {
        blob.hash()
    };
    log::debug!("hash for {:?}: {}", path, hash);

    Ok(format!("{}\n", hash).into_bytes())
}
