//! Host toolkit interface.
//!
//! The component never touches a widget tree directly. Everything it needs
//! from the surrounding UI goes through [`GhostHost`], so the same behavior
//! can sit on top of an in-memory document, a test double, or a real
//! toolkit binding.

use std::fmt;
use std::hash::Hash;

/// Notifications a bound element (or its form) can deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    /// A keystroke finished and the value may have changed.
    KeyUp,
    /// Fired on the form element, not the input.
    Submit,
}

pub trait GhostHost {
    /// Lightweight element handle. Forms are elements too.
    type Element: Copy + Eq + Hash + fmt::Debug;

    /// Current value of a text control, `None` if the element has no value.
    fn value(&self, el: Self::Element) -> Option<&str>;

    fn set_value(&mut self, el: Self::Element, value: &str);

    fn add_class(&mut self, el: Self::Element, class: &str);

    fn remove_class(&mut self, el: Self::Element, class: &str);

    /// Form with the given DOM identifier (without a leading `#`).
    fn form_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Nearest enclosing form by structural ancestry.
    fn closest_form(&self, el: Self::Element) -> Option<Self::Element>;

    /// Ask the host to report `event` on `target` for the bound element
    /// `bound`. Subscribing the same triple twice must not deliver twice.
    fn subscribe(&mut self, target: Self::Element, event: EventKind, bound: Self::Element);

    /// Whether the element is still part of the page.
    fn is_connected(&self, el: Self::Element) -> bool;
}
