//! Terminal QR code command

use super::helpers::require_link;
use crate::interfaces::cli::CliError;
use crate::services::{LinkService, QrRenderer};

pub fn print_qr(service: &LinkService, id: &str) -> Result<(), CliError> {
    let link = require_link(service, id)?;
    let qr = QrRenderer::new().render_terminal(&link.url)?;

    println!("{}", qr);
    println!("{}", link.url);
    Ok(())
}
