//! CLI interface module
//!
//! This module provides command-line interface functionality for linkshelf.
//! Commands work directly on the configured store through `LinkService`.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LinkshelfError;
use crate::services::{LinkService, Notice};
use crate::storage::StorageFactory;
use commands::{
    add_link, config_generate, list_links, open_link, print_qr, remove_link, share_link,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkshelfError> for CliError {
    fn from(err: LinkshelfError) -> Self {
        match err {
            LinkshelfError::StorageRead(_) | LinkshelfError::StorageWrite(_) => {
                CliError::StorageError(Notice::from_error(&err).message)
            }
            LinkshelfError::Validation(_) | LinkshelfError::DuplicateLink(_) => {
                CliError::ParseError(Notice::from_error(&err).message)
            }
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::CommandError(format!("I/O error: {}", err))
    }
}

fn open_service(config: &StaticConfig) -> Result<LinkService, CliError> {
    let store = StorageFactory::create(&config.storage)?;
    Ok(LinkService::load(store, config.storage.key.clone()))
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        // Generate doesn't need storage
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::Add { name, url } => add_link(
            &open_service(config)?,
            &name,
            &url,
            &config.server.base_path,
        ),
        Commands::Remove { id, yes } => remove_link(&open_service(config)?, &id, yes),
        Commands::List => list_links(&open_service(config)?, &config.server.base_path),
        Commands::Open { target } => open_link(&open_service(config)?, &target),
        Commands::Share { id } => share_link(&open_service(config)?, &id),
        Commands::Qr { id } => print_qr(&open_service(config)?, &id),
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by the server mode".to_string(),
        )),
    }
}
