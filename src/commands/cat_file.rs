use std::str::FromStr;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::fs::ObjectStore;
use crate::hashing::Hash;

/// What part of the object `cat_file` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    Content,
    Type,
    Size,
}

/// Reads the object with the given hash from the repository in `config`.
///
/// The content is returned as is, without a trailing newline, so binary blobs survive the trip to
/// stdout.
pub fn cat_file(hash: &str, mode: CatFileMode, config: &Config) -> Result<Vec<u8>> {
    let hash = Hash::from_str(hash).context("object hash was invalid")?;

    let store = ObjectStore::from_config(config);
    let object = store
        .read(&hash)
        .context(format!("could not read object {}", hash))?;

    Ok(match mode {
        CatFileMode::Content => object.data,
        CatFileMode::Type => format!("{}\n", object.kind).into_bytes(),
        CatFileMode::Size => format!("{}\n", object.size()).into_bytes(),
    })
}
