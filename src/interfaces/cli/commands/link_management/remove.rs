//! Remove link command

use colored::Colorize;

use super::helpers::{confirm, require_link};
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub fn remove_link(service: &LinkService, id: &str, yes: bool) -> Result<(), CliError> {
    let link = require_link(service, id)?;

    if !yes {
        let prompt = format!(
            "{} {} {}",
            "Are you sure you want to delete".yellow(),
            link.name.cyan(),
            "? [y/N] ".yellow()
        );
        if !confirm(&prompt)? {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    if service.delete_link(id)? {
        println!("{} Deleted link: {}", "✓".bold().green(), id.cyan());
    }
    Ok(())
}
