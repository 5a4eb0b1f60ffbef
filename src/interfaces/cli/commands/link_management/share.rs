//! Share payload command

use colored::Colorize;

use super::helpers::require_link;
use crate::interfaces::cli::CliError;
use crate::services::{LinkService, SharePayload};

pub fn share_link(service: &LinkService, id: &str) -> Result<(), CliError> {
    let link = require_link(service, id)?;
    let payload = SharePayload::for_link(&link);

    println!("{} {}", "title:".dimmed(), payload.title.cyan());
    println!("{} {}", "text: ".dimmed(), payload.text);
    println!("{} {}", "url:  ".dimmed(), payload.url.blue().underline());
    Ok(())
}
