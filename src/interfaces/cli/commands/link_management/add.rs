//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, short_link};

pub fn add_link(
    service: &LinkService,
    name: &str,
    url: &str,
    base_path: &str,
) -> Result<(), CliError> {
    let link = service.add_link(name, url)?;

    println!(
        "{} Added link: {} -> {}",
        "✓".bold().green(),
        link.name.cyan(),
        link.url.blue().underline()
    );
    println!(
        "  {} {}",
        "Short link:".dimmed(),
        short_link(base_path, &link.id).magenta()
    );

    Ok(())
}
