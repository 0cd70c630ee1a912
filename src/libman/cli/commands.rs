//! # CLI Layer
//!
//! This module is **one possible UI client** for libman, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `resolve_paths()`: Config directory and data file, from flags, env and config
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::logger::init_cli_logger;
use super::menu::Menu;
use super::print::write_messages;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use libman::api::{self, ConfigAction, LibraryApi};
use libman::commands::LibmanPaths;
use libman::config::LibmanConfig;
use libman::error::{LibraryError, Result};
use libman::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "LIBMAN_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let paths = resolve_paths(&cli)?;
    tracing::debug!(
        config_dir = %paths.config_dir.display(),
        data_file = %paths.data_file.display(),
        "resolved paths"
    );

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value),
        Some(Commands::Init) => handle_init(&paths),
        Some(Commands::Doctor { fix }) => handle_doctor(&paths, fix),
        Some(Commands::Menu) | None => handle_menu(&paths),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "libman", "libman")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LibraryError::Config("Could not determine config dir".to_string()))
}

fn resolve_paths(cli: &Cli) -> Result<LibmanPaths> {
    let config_dir = config_dir()?;
    let data_file = match &cli.data_file {
        Some(path) => path.clone(),
        None => LibmanConfig::load(&config_dir)?.data_file,
    };
    Ok(LibmanPaths {
        config_dir,
        data_file,
    })
}

fn open_api(paths: &LibmanPaths) -> Result<LibraryApi<FileStore>> {
    LibraryApi::new(FileStore::new(&paths.data_file))
}

fn handle_menu(paths: &LibmanPaths) -> Result<()> {
    let mut api = open_api(paths)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut api, stdin.lock(), stdout.lock()).run()
}

fn handle_init(paths: &LibmanPaths) -> Result<()> {
    let result = api::init(paths)?;
    write_messages(&mut io::stdout(), &result.messages)?;
    Ok(())
}

fn handle_doctor(paths: &LibmanPaths, fix: bool) -> Result<()> {
    let mut api = open_api(paths)?;
    let result = api.doctor(fix)?;
    write_messages(&mut io::stdout(), &result.messages)?;
    Ok(())
}

fn handle_config(paths: &LibmanPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(paths, action)?;
    let mut out = io::stdout();
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                writeln!(out, "{} = {}", key, value)?;
            }
        }
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}
