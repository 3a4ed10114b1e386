use std::fmt::Display;
use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{Error, Result};

pub const HASH_BYTE_LEN: usize = 20;
pub const HASH_HEX_LEN: usize = HASH_BYTE_LEN * 2;

/// Number of hex characters used for the fan-out directory of an object.
const FAN_OUT_LEN: usize = 2;

/// SHA1 digest of an object's encoded bytes. It is used as the object's identity and as the key
/// to find it inside the objects folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_BYTE_LEN]);

impl Hash {
    /// Returns the SHA1 hash for the data passed.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Splits the hex representation of the hash into the fan-out directory name (first two
    /// characters) and the file name (the remaining 38).
    pub fn fan_out(&self) -> (String, String) {
        let hex = self.to_string();
        let (dir, file) = hex.split_at(FAN_OUT_LEN);
        (dir.to_owned(), file.to_owned())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = Error;

    /// Parses a 40 character hex string, upper or lower case.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != HASH_HEX_LEN {
            return Err(Error::InvalidHash(s.to_owned()));
        }
        let mut bytes = [0u8; HASH_BYTE_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidHash(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

// Tests
