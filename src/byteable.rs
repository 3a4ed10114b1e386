use crate::Result;

/// Trait that ensures a type can be manipulated in its canonical binary format.
pub trait Byteable {
    /// Encoding never fails, the same value always produces the same bytes.
    fn as_bytes(&self) -> Vec<u8>;
    fn from_bytes(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized;
}
