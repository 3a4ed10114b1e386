mod add;
mod cat_file;

use add::add;
use cat_file::{CatFileMode, cat_file};

use anyhow::Result;

use crate::args::Command;
use crate::config::Config;

/// Calls the corresponding function to perform every command variant.
///
/// # Return
///
/// The bytes to write to stdout.
///
/// # Errors
///
/// This function will fail if any of the executed commands return an error.
pub fn execute_command(command: &Command, config: &Config) -> Result<Vec<u8>> {
    match command {
        Command::CatFile {
            kind, size, hash, ..
        } => {
            let mode = if *kind {
                CatFileMode::Type
            } else if *size {
                CatFileMode::Size
            } else {
                CatFileMode::Content
            };
            cat_file(hash, mode, config)
        }
        Command::Add { file, write } => add(file, *write, config),
    }
}
