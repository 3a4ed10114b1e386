use std::str::FromStr;

use crate::{Error, Result};

/// The kind of an object, written as the first token of its header.
///
/// Only blobs can be read and written for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
}

impl ObjectType {
    pub const BLOB_STRING: &'static str = "blob";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => ObjectType::BLOB_STRING,
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            ObjectType::BLOB_STRING => Ok(ObjectType::Blob),
            _ => Err(Error::UnsupportedType(value.to_owned())),
        }
    }
}
