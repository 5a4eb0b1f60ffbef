//! Application services shared by the web UI and the CLI

pub mod link_book;
pub mod link_service;
pub mod notice;
pub mod qr;
pub mod redirect;
pub mod share;

pub use link_book::LinkBook;
pub use link_service::LinkService;
pub use notice::{Notice, NoticeLevel};
pub use qr::QrRenderer;
pub use redirect::{Navigator, RecordingNavigator, RedirectOutcome, ShortLinkResolver, short_link};
pub use share::SharePayload;
