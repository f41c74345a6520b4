//! Reference host for [`ghost_text`].
//!
//! [`Document`] holds a DOM tree, the live values of its text controls and
//! the table of event subscriptions, and implements
//! [`GhostHost`](ghost_text::GhostHost). [`Page`] adds user-level actions
//! (focus changes, keystrokes, form submission) and routes the resulting
//! notifications to the page's [`GhostField`](ghost_text::GhostField).

mod document;
mod error;
mod input_store;
mod listeners;
mod page;
pub mod script;

pub use document::Document;
pub use error::PageError;
pub use input_store::InputValueStore;
pub use listeners::ListenerTable;
pub use page::Page;
