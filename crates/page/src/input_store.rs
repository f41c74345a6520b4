use dom::Id;
use std::collections::HashMap;

/// Live values of the page's text controls, keyed by node id.
///
/// Markup only provides the initial value; after seeding, this store is the
/// source of truth and the `value` attribute is never written back.
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<Id, String>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Id) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    pub fn set(&mut self, id: Id, value: String) {
        self.values.insert(id, value);
    }

    /// Record the markup value unless the control already has a live one.
    pub fn seed(&mut self, id: Id, initial: String) {
        self.values.entry(id).or_insert(initial);
    }

    pub fn remove(&mut self, id: Id) -> Option<String> {
        self.values.remove(&id)
    }

    /// Keystroke: append one character at the end of the value.
    pub fn push_char(&mut self, id: Id, ch: char) {
        self.values.entry(id).or_default().push(ch);
    }

    /// Backspace: drop the last character. Returns `false` on an empty or
    /// unknown control.
    pub fn pop_char(&mut self, id: Id) -> bool {
        self.values
            .get_mut(&id)
            .is_some_and(|v| v.pop().is_some())
    }
}
