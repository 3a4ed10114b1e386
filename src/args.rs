use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Contains the commands passed to the program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the repository folder containing the objects folder [default: .git]
    #[arg(long = "git-dir", global = true, env = "GIT_DIR")]
    pub git_dir: Option<PathBuf>,

    /// Prints every intermediate step (resolved path, raw data, parsed header) to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// A list of subcommands the program can perform
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shows the object file with the specified hash
    CatFile {
        /// Prints the content of the object (the default)
        #[arg(short = 'p', conflicts_with_all = ["kind", "size"])]
        pretty: bool,
        /// Prints only the type of the object
        #[arg(short = 't', conflicts_with = "size")]
        kind: bool,
        /// Prints only the size of the object in bytes
        #[arg(short = 's')]
        size: bool,
        /// Hash of the object to show
        hash: String,
    },

    /// Creates a blob from a file and prints its hash
    Add {
        /// File to read the blob content from
        file: PathBuf,
        /// Also writes the blob to the objects folder
        #[arg(short, long)]
        write: bool,
    },
}
