//! List links command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, short_link};

pub fn list_links(service: &LinkService, base_path: &str) -> Result<(), CliError> {
    let links = service.links();

    if links.is_empty() {
        println!("{} No links saved yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Saved links:".bold().green());
    println!();
    for link in &links {
        println!(
            "  {} {} -> {}",
            link.id.dimmed(),
            link.name.cyan(),
            link.url.blue().underline()
        );
        println!("      {}", short_link(base_path, &link.id).magenta());
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
