use std::io::{self, BufRead, Write};

use crate::interfaces::cli::CliError;
use crate::services::LinkService;
use crate::storage::Link;

/// 交互确认，只有输入 y 才返回 true
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub(super) fn require_link(service: &LinkService, id: &str) -> Result<Link, CliError> {
    service
        .find(id)
        .ok_or_else(|| CliError::CommandError(format!("Link does not exist: {}", id)))
}
