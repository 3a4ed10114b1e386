#![allow(clippy::uninlined_format_args)]

mod args;
mod byteable;
mod commands;
mod config;
mod constants;
mod error;
mod fs;
mod hashing;
mod object;
mod utils;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

pub use constants::*;
pub use error::{Error, Result};

use config::Config;

fn init_logger(config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if config.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    // a missing .env file is fine, it only provides defaults like GIT_DIR
    let _ = dotenvy::dotenv();

    let args = args::Args::parse_from(wild::args_os());
    let config = match &args.git_dir {
        Some(path) => Config::new(path, args.debug),
        None => Config {
            debug: args.debug,
            ..Config::default()
        },
    };
    init_logger(&config);
    log::debug!("{:?}", config);

    let output = match commands::execute_command(&args.command, &config) {
        Ok(output) => output,
        Err(error) => {
            eprintln!("{} {:?}", "error:".red().bold(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
        eprintln!("{} could not write output: {}", "error:".red().bold(), error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
