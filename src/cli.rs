//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkshelf using clap's derive macros.

use clap::{Parser, Subcommand};

/// Linkshelf - save, shorten and share links, even offline
#[derive(Parser)]
#[command(name = "linkshelf")]
#[command(version)]
#[command(about = "Save, shorten and share links, even offline", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the web UI (default)
    Serve,

    /// Save a link
    ///
    /// The URL may omit its scheme: "example.com" is stored as
    /// "https://example.com".
    Add {
        /// Display name
        name: String,

        /// Target URL
        url: String,
    },

    /// Delete a saved link
    Remove {
        /// Link id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List saved links with their short links
    List,

    /// Resolve a short link and print its target
    ///
    /// Accepts a full short link ("http://127.0.0.1:8080/#lqu5m2o0"),
    /// a fragment ("#lqu5m2o0") or a bare id.
    Open {
        /// Short link, fragment or id
        target: String,
    },

    /// Print what the share sheet would receive for a link
    Share {
        /// Link id
        id: String,
    },

    /// Print the QR code of a link's original URL
    Qr {
        /// Link id
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serve() {
        let cli = Cli::try_parse_from(["linkshelf"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["linkshelf", "add", "Docs", "docs.rs"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: "Docs".to_string(),
                url: "docs.rs".to_string()
            })
        );

        let cli =
            Cli::try_parse_from(["linkshelf", "remove", "abc", "--yes", "-c", "my.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Remove {
                id: "abc".to_string(),
                yes: true
            })
        );
        assert_eq!(cli.config.as_deref(), Some("my.toml"));

        let cli = Cli::try_parse_from(["linkshelf", "config", "generate", "--force"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate {
                    output_path: None,
                    force: true
                }
            })
        );
    }

    #[test]
    fn test_add_requires_both_args() {
        assert!(Cli::try_parse_from(["linkshelf", "add", "Docs"]).is_err());
    }
}
