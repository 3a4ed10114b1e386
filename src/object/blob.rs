use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Object;

/// Represents a blob object with some extra information, like the path it was read from.
#[derive(Debug)]
pub struct ExtendedBlob {
    pub blob: Object,
    pub path: PathBuf,
}

impl ExtendedBlob {
    /// Reads the whole file at `path` and wraps its content in a blob object.
    ///
    /// # Errors
    ///
    /// This function will fail if the file could not be read.
    pub fn try_from_path(path: PathBuf) -> Result<Self> {
        let data = std::fs::read(&path).context(format!("could not read file {:?}", path))?;
        log::debug!("read {} bytes from {:?}", data.len(), path);

        Ok(Self {
            blob: Object::blob(data),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectType;

    #[test]
    fn test_blob_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, b"hello\n").unwrap();

        let extended = ExtendedBlob::try_from_path(path.clone()).unwrap();
        assert_eq!(path, extended.path);
        assert_eq!(ObjectType::Blob, extended.blob.kind);
        assert_eq!(
            "ce013625030ba8dba906f756967f9e9ca394464a",
            extended.blob.hash().to_string()
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ExtendedBlob::try_from_path(dir.path().join("missing")).is_err());
    }
}
