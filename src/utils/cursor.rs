use std::io::Cursor;

use crate::{Error, Result};

pub trait EasyRead {
    fn read_until_checked(&mut self, byte: u8, missing: &'static str) -> Result<Vec<u8>>;
}

impl<T: AsRef<[u8]>> EasyRead for Cursor<T> {
    /// Reads until `byte`, returning what was read without the delimiter.
    ///
    /// If the delimiter never shows up the read is treated as a malformed header, with `missing`
    /// as the reason, so callers can just use the `?` operator.
    fn read_until_checked(&mut self, byte: u8, missing: &'static str) -> Result<Vec<u8>> {
        let start = self.position() as usize;
        let rest = self.get_ref().as_ref().get(start..).unwrap_or_default();
        let end = rest
            .iter()
            .position(|b| *b == byte)
            .ok_or(Error::MalformedHeader(missing))?;
        let buf = rest[..end].to_vec();

        // skipping the delimiter too
        self.set_position((start + end + 1) as u64);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_checked() {
        let mut cursor = Cursor::new(b"blob 6\0hello\n".as_slice());
        assert_eq!(b"blob".to_vec(), cursor.read_until_checked(b' ', "space").unwrap());
        assert_eq!(b"6".to_vec(), cursor.read_until_checked(b'\0', "null").unwrap());
        assert_eq!(7, cursor.position());
        assert!(matches!(
            cursor.read_until_checked(b'\0', "null"),
            Err(Error::MalformedHeader("null"))
        ));
        // a failed read leaves the cursor where it was
        assert_eq!(7, cursor.position());
    }
}
