//! Server-rendered UI components
//!
//! Components render from the current collection only. Mutations leave the
//! UI as [`UiEvent`]s and are applied by the link service.

pub mod events;
pub mod link_form;
pub mod link_item;
pub mod link_list;
pub mod page;

pub use events::{AddLinkForm, UiEvent};
pub use link_form::LinkForm;
pub use link_item::{LinkItem, QrView};
pub use link_list::LinkList;
pub use page::Page;
