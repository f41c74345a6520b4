//! # ghost_text
//!
//! Placeholder ("ghost") text for text inputs.
//!
//! A bound input shows its ghost text, marked with a presentation class,
//! until the user focuses it. On blur the ghost text comes back if the field
//! was left blank, and on form submission a value still equal to the ghost
//! text is cleared so it is never sent as real input.
//!
//! - [`GhostField`]: registry of bound elements and the event handlers
//! - [`GhostHost`]: what the component needs from a UI toolkit
//! - [`GhostOptions`] / [`GhostSettings`]: partial configuration
//! - [`GhostOp`]: typed operation requests, parsed from names at the boundary
//!
//! ## Per-element state
//!
//! Each element is in one of two [`GhostPhase`]s:
//!
//! ```text
//! ShowingGhost --focus--> ShowingUser
//! ShowingUser  --blur [blank or == ghost text]--> ShowingGhost
//! ShowingUser  --submit [clear_on_submit and == ghost text]--> ShowingUser (value cleared)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! let mut ghosts = GhostField::new();
//! ghosts.attach(&mut host, search_box, GhostOptions::new().ghost_text("Search"));
//! ghosts.on_focus(&mut host, search_box);
//! ```

mod error;
mod field;
mod host;
mod op;
mod options;

pub use error::GhostError;
pub use field::{GhostField, GhostFieldState, GhostPhase};
pub use host::{EventKind, GhostHost};
pub use op::{GhostOp, OpName};
pub use options::{Callback, DEFAULT_GHOST_CLASS, GhostConfig, GhostOptions, GhostSettings};
