use std::path::{Path, PathBuf};

use crate::hashing::Hash;

/// Returns the location of the object with the given hash inside `objects_path`:
///
/// `{objects_path}/{first two hex chars}/{remaining 38 hex chars}`
pub fn object_path(objects_path: &Path, hash: &Hash) -> PathBuf {
    let (dir, file_name) = hash.fan_out();
    objects_path.join(dir).join(file_name)
}

// Tests

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const HASH: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

    #[test]
    fn test_object_path() {
        let root = PathBuf::from(".git/objects");
        let hash = Hash::from_str(HASH).unwrap();
        let path = object_path(&root, &hash);
        assert_eq!(
            PathBuf::from(".git/objects/ce/013625030ba8dba906f756967f9e9ca394464a"),
            path
        );
        assert_eq!(path, object_path(&root, &hash));

        let upper = Hash::from_str(&HASH.to_uppercase()).unwrap();
        assert_eq!(path, object_path(&root, &upper));
    }

    #[test]
    fn test_segment_lengths() {
        let hash = Hash::compute(b"anything");
        let path = object_path(Path::new(""), &hash);
        let segments: Vec<String> = path
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        assert_eq!(2, segments.len());
        assert_eq!(2, segments[0].len());
        assert_eq!(38, segments[1].len());
    }
}
