use std::path::{Path, PathBuf};

use crate::Constants;

/// Settings shared by every command, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// The location of the repository folder (usually `.git`).
    pub repository_path: PathBuf,
    /// Enables the diagnostic trace of every step on stderr.
    pub debug: bool,
}

impl Config {
    pub fn new(repository_path: impl AsRef<Path>, debug: bool) -> Self {
        Self {
            repository_path: path_clean::clean(repository_path),
            debug,
        }
    }

    /// The folder where loose objects live, `<repository>/objects`.
    pub fn objects_path(&self) -> PathBuf {
        self.repository_path.join(Constants::OBJECTS_FOLDER_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Constants::REPOSITORY_FOLDER_NAME, false)
    }
}
