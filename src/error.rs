use std::path::PathBuf;

/// Enum intended to represent all the different ways reading or writing an object can fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("hash {0:?} is not valid, expected 40 hexadecimal characters")]
    InvalidHash(String),
    #[error("no object found at {path:?}")]
    ObjectNotFound { path: PathBuf },
    #[error("could not read object file {path:?}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("object file {path:?} is not a valid zlib stream")]
    CorruptStream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("object header is malformed: {0}")]
    MalformedHeader(&'static str),
    #[error("object type {0:?} is not supported")]
    UnsupportedType(String),
    #[error("object size {0:?} is not a valid non-negative decimal number")]
    MalformedSize(String),
    #[error("header declares {expected} bytes but the payload has {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("could not write object to {path:?}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstraction of the result type where the error is always an Error from this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
