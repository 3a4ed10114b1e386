use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::byteable::Byteable;
use crate::config::Config;
use crate::hashing::Hash;
use crate::object::Object;
use crate::utils::zlib::{self, DecompressError};
use crate::{Error, Result};

/// Loose object storage rooted at an objects folder, where every object is a zlib compressed file
/// found at `{first two hex chars}/{remaining hex chars}` of its hash.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects_path: PathBuf,
}

impl ObjectStore {
    pub fn new(objects_path: impl Into<PathBuf>) -> Self {
        Self {
            objects_path: objects_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.objects_path())
    }

    pub fn objects_path(&self) -> &Path {
        &self.objects_path
    }

    /// Returns where the object with this hash is (or would be) stored.
    pub fn object_path(&self, hash: &Hash) -> PathBuf {
        super::path::object_path(&self.objects_path, hash)
    }

    /// Returns true if there is an object file for `hash`. The file is not decompressed.
    pub fn exists(&self, hash: &Hash) -> bool {
        self.object_path(hash).is_file()
    }

    /// Reads, decompresses and decodes the object stored under `hash`.
    ///
    /// # Errors
    ///
    /// This function will fail if:
    /// - There is no file for the hash (`Error::ObjectNotFound`).
    /// - The file could not be opened or read (`Error::StoreRead`).
    /// - The file is not a valid zlib stream (`Error::CorruptStream`).
    /// - The decompressed data is not a valid object.
    pub fn read(&self, hash: &Hash) -> Result<Object> {
        let path = self.object_path(hash);
        log::debug!("object path: {:?}", path);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound { path });
            }
            Err(source) => return Err(Error::StoreRead { path, source }),
        };

        let bytes = zlib::decompress(BufReader::new(file)).map_err(|e| match e {
            DecompressError::Read(source) => Error::StoreRead {
                path: path.clone(),
                source,
            },
            DecompressError::Corrupt(source) => Error::CorruptStream {
                path: path.clone(),
                source,
            },
        })?;
        log::debug!(
            "decompressed {} bytes: {}",
            bytes.len(),
            bytes.escape_ascii()
        );

        let object = Object::from_bytes(&bytes)?;
        log::debug!("parsed header: type {}, size {}", object.kind, object.size());

        Ok(object)
    }

    /// Encodes, compresses and writes `object` to the objects folder, returning the hash used to
    /// find it.
    ///
    /// The data is written to a temporary file next to its final location and then renamed, so a
    /// failed write never leaves a partial object behind. If the object is already stored nothing
    /// is written, since the same hash means the same content.
    ///
    /// # Errors
    ///
    /// This function fails with `Error::StoreWrite` if the directory or the file could not be
    /// created.
    pub fn write(&self, object: &Object) -> Result<Hash> {
        let (bytes, hash) = object.encode_and_hash();
        let path = self.object_path(&hash);
        log::debug!("writing {} to {:?}", hash, path);

        if self.exists(&hash) {
            log::info!("object {} is already stored", hash);
            return Ok(hash);
        }

        let (dir, _) = hash.fan_out();
        let folder_path = self.objects_path().join(dir);
        fs::create_dir_all(&folder_path).map_err(|source| Error::StoreWrite {
            path: folder_path.clone(),
            source,
        })?;

        let compressed = zlib::compress(&bytes).map_err(|source| Error::StoreWrite {
            path: path.clone(),
            source,
        })?;

        let mut temp = NamedTempFile::new_in(&folder_path).map_err(|source| Error::StoreWrite {
            path: folder_path.clone(),
            source,
        })?;
        temp.write_all(&compressed)
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|source| Error::StoreWrite {
                path: temp.path().to_owned(),
                source,
            })?;
        temp.persist(&path).map_err(|e| Error::StoreWrite {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(hash)
    }
}

// Tests
