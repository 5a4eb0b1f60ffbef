//! Link management commands
//!
//! This module provides CLI commands for managing saved links.

mod add;
mod helpers;
mod list;
mod open;
mod qr;
mod remove;
mod share;

pub use add::add_link;
pub use helpers::confirm;
pub use list::list_links;
pub use open::open_link;
pub use qr::print_qr;
pub use remove::remove_link;
pub use share::share_link;
