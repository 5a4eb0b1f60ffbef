//! Resolve a short link

use colored::Colorize;
use tracing::debug;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, RecordingNavigator, RedirectOutcome, ShortLinkResolver};

pub fn open_link(service: &LinkService, target: &str) -> Result<(), CliError> {
    let mut navigator = RecordingNavigator::from_target(target);

    match ShortLinkResolver::resolve(&mut navigator, &service.snapshot()) {
        RedirectOutcome::Opened(link) => {
            debug!("Resolved {} to {}", target, link.url);
            // 只输出目标地址，方便管道使用
            println!("{}", link.url);
            Ok(())
        }
        RedirectOutcome::NotFound(id) => {
            println!("{} No link for short id {}", "ℹ".bold().blue(), id.cyan());
            Ok(())
        }
        RedirectOutcome::NoFragment => Err(CliError::ParseError(format!(
            "No short link id in {:?}",
            target
        ))),
    }
}
