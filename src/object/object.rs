use std::io::Cursor;

use crate::byteable::Byteable;
use crate::hashing::Hash;
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

use super::{NULL_BYTE, ObjectType, SPACE_BYTE};

/// An object as stored in the objects folder: its type and the raw content it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjectType,
    pub data: Vec<u8>,
}

impl Object {
    pub fn new<T: Into<Vec<u8>>>(kind: ObjectType, data: T) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    pub fn blob<T: Into<Vec<u8>>>(data: T) -> Self {
        Self::new(ObjectType::Blob, data)
    }

    /// Size of the content in bytes, as written in the header.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the SHA1 hash of the encoded object, header included.
    pub fn hash(&self) -> Hash {
        Hash::compute(&self.as_bytes())
    }

    /// Encodes the object and hashes the result, so callers that need both only encode once.
    pub fn encode_and_hash(&self) -> (Vec<u8>, Hash) {
        let bytes = self.as_bytes();
        let hash = Hash::compute(&bytes);
        (bytes, hash)
    }
}

impl Byteable for Object {
    /// Returns the encoded data for this object, with the following format:
    ///
    /// `{type} {data_length}\0{data}`
    fn as_bytes(&self) -> Vec<u8> {
        // Encoding to this format: blob 4\0abcd
        let kind = self.kind.as_str().as_bytes();
        let len = self.size().to_string();

        let mut bytes = Vec::with_capacity(kind.len() + len.len() + 2 + self.size());
        bytes.extend_from_slice(kind);
        bytes.push(SPACE_BYTE);
        bytes.extend_from_slice(len.as_bytes());
        bytes.push(NULL_BYTE);
        bytes.extend_from_slice(&self.data);

        bytes
    }

    /// Reads a byte slice, asuming it represents a decompressed object file.
    ///
    /// # Errors
    ///
    /// This function will fail if:
    /// - The space after the type or the null byte after the size are missing.
    /// - The type is not a supported one.
    /// - The size is not a plain decimal number.
    /// - The size does not match the amount of bytes after the null byte.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        let kind_buf = cursor.read_until_checked(SPACE_BYTE, "expected space after object type")?;
        let kind: ObjectType = String::from_utf8_lossy(&kind_buf).parse()?;

        let len_buf =
            cursor.read_until_checked(NULL_BYTE, "expected null byte after object size")?;
        let data_len = parse_size(&len_buf)?;

        let data = &bytes[cursor.position() as usize..];
        if data_len != data.len() {
            return Err(Error::SizeMismatch {
                expected: data_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            kind,
            data: data.to_vec(),
        })
    }
}

/// Parses the size segment of a header. Only ASCII digits are accepted, so signs and whitespace
/// are rejected even where `str::parse` would allow them.
fn parse_size(bytes: &[u8]) -> Result<usize> {
    let malformed = || Error::MalformedSize(String::from_utf8_lossy(bytes).into_owned());

    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    // only digits at this point, so this is valid utf-8
    std::str::from_utf8(bytes)
        .map_err(|_| malformed())?
        .parse()
        .map_err(|_| malformed())
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bytes() {
        let object = Object::blob(b"hello\n".as_slice());
        assert_eq!(b"blob 6\0hello\n".as_slice(), object.as_bytes().as_slice());

        assert_eq!(b"blob 0\0".as_slice(), Object::blob(Vec::<u8>::new()).as_bytes());
    }

    #[test]
    fn test_size_counts_bytes() {
        // 2 characters, 6 bytes
        let object = Object::blob("é😀".as_bytes());
        assert_eq!(6, object.size());
        assert!(object.as_bytes().starts_with(b"blob 6\0"));
    }

    #[test]
    fn test_hash() {
        let object = Object::blob(b"hello\n".as_slice());
        assert_eq!(
            "ce013625030ba8dba906f756967f9e9ca394464a",
            object.hash().to_string()
        );
        assert_eq!(
            "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391",
            Object::blob(Vec::<u8>::new()).hash().to_string()
        );

        let (bytes, hash) = object.encode_and_hash();
        assert_eq!(object.as_bytes(), bytes);
        assert_eq!(object.hash(), hash);
    }

    #[test]
    fn test_hash_covers_header() {
        let object = Object::blob(b"hello\n".as_slice());
        assert_ne!(Hash::compute(&object.data), object.hash());
        assert_eq!(object.hash(), Object::blob(b"hello\n".to_vec()).hash());
        assert_ne!(object.hash(), Object::blob(b"hello".as_slice()).hash());
    }

    #[test]
    fn test_from_bytes() {
        let object = Object::from_bytes(b"blob 6\0hello\n").unwrap();
        assert_eq!(ObjectType::Blob, object.kind);
        assert_eq!(b"hello\n".as_slice(), object.data.as_slice());
    }

    #[test]
    fn test_from_bytes_keeps_null_and_binary_bytes() {
        let data = vec![0u8, 159, 146, 150, 0, b' ', 0, 255];
        let object = Object::blob(data.clone());
        let decoded = Object::from_bytes(&object.as_bytes()).unwrap();
        assert_eq!(data, decoded.data);
        assert_eq!(object, decoded);
    }

    #[test]
    fn test_from_bytes_unsupported_type() {
        let result = Object::from_bytes(b"tree 0\0");
        assert!(matches!(result, Err(Error::UnsupportedType(kind)) if kind == "tree"));
    }

    #[test]
    fn test_from_bytes_malformed_size() {
        for input in [
            b"blob -1\0".as_slice(),
            b"blob +1\0a",
            b"blob \0",
            b"blob 1 \0a",
            b"blob abc\0",
            b"blob 99999999999999999999999999\0",
        ] {
            assert!(
                matches!(Object::from_bytes(input), Err(Error::MalformedSize(_))),
                "expected {:?} to be rejected",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_from_bytes_size_mismatch() {
        assert!(matches!(
            Object::from_bytes(b"blob 10\0hello\n"),
            Err(Error::SizeMismatch {
                expected: 10,
                actual: 6
            })
        ));
        assert!(matches!(
            Object::from_bytes(b"blob 1\0hello\n"),
            Err(Error::SizeMismatch {
                expected: 1,
                actual: 6
            })
        ));
    }

    #[test]
    fn test_from_bytes_missing_separators() {
        assert!(matches!(
            Object::from_bytes(b"blob"),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            Object::from_bytes(b"blob 6hello\n"),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            Object::from_bytes(b""),
            Err(Error::MalformedHeader(_))
        ));
    }
}
