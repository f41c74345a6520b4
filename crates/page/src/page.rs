use crate::document::Document;
use crate::error::PageError;
use dom::{Id, Node};
use ghost_text::{EventKind, GhostField, GhostOp, GhostOptions, GhostSettings, OpName};

/// A document with ghost text fields and a single focus owner.
///
/// Every user action is turned into host notifications and routed to the
/// bound elements that subscribed to them.
#[derive(Debug)]
pub struct Page {
    doc: Document,
    ghosts: GhostField<Document>,
    focused: Option<Id>,
}

impl Page {
    pub fn new(root: Node) -> Self {
        Self {
            doc: Document::new(root),
            ghosts: GhostField::new(),
            focused: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn ghosts(&self) -> &GhostField<Document> {
        &self.ghosts
    }

    pub fn focused(&self) -> Option<Id> {
        self.focused
    }

    /// Resolve a selector that must match at least one element.
    pub fn query(&self, selector: &str) -> Result<Vec<Id>, PageError> {
        let ids = self.doc.select(selector);
        if ids.is_empty() {
            return Err(PageError::NoMatch(selector.to_string()));
        }
        Ok(ids)
    }

    /// First match of a selector.
    pub fn element(&self, selector: &str) -> Result<Id, PageError> {
        Ok(self.query(selector)?[0])
    }

    pub fn value(&self, id: Id) -> Option<&str> {
        self.doc.values().get(id)
    }

    /// Bind ghost text to every match. `make_opts` runs once per element.
    pub fn attach(
        &mut self,
        selector: &str,
        make_opts: impl FnMut() -> GhostOptions,
    ) -> Result<Vec<Id>, PageError> {
        let ids = self.query(selector)?;
        self.ghosts
            .attach_all(&mut self.doc, ids.iter().copied(), make_opts);
        Ok(ids)
    }

    /// Run a named operation on every match, the way page scripts call it.
    /// `options` is an optional JSON options object.
    pub fn invoke(
        &mut self,
        selector: &str,
        name: &str,
        options: Option<&str>,
    ) -> Result<Vec<Id>, PageError> {
        let op: OpName = name.parse()?;
        let settings = options
            .map(|json| serde_json::from_str::<GhostSettings>(json))
            .transpose()?;

        let ids = self.query(selector)?;
        for &id in &ids {
            let op = op.with_arg(settings.clone().map(GhostOptions::from));
            self.ghosts.apply(&mut self.doc, id, op);
        }
        Ok(ids)
    }

    /// Apply an already-built request to one element.
    pub fn apply(&mut self, id: Id, op: GhostOp) {
        self.ghosts.apply(&mut self.doc, id, op);
    }

    /// Move focus to `id`, blurring the previous owner first.
    pub fn focus(&mut self, id: Id) -> Result<(), PageError> {
        if !self.doc.is_text_control(id) {
            return Err(PageError::NotATextControl(id));
        }
        if self.focused == Some(id) {
            return Ok(());
        }

        self.blur();
        self.focused = Some(id);
        self.fire(id, EventKind::Focus);
        Ok(())
    }

    /// Drop focus. No-op if nothing is focused.
    pub fn blur(&mut self) {
        if let Some(prev) = self.focused.take() {
            self.fire(prev, EventKind::Blur);
        }
    }

    /// Type one character into the focused control.
    pub fn key_press(&mut self, ch: char) -> Result<(), PageError> {
        let id = self.focused.ok_or(PageError::NoFocus)?;
        self.doc.values_mut().push_char(id, ch);
        self.fire(id, EventKind::KeyUp);
        Ok(())
    }

    /// Type a string, one keystroke per character.
    pub fn type_text(&mut self, text: &str) -> Result<(), PageError> {
        text.chars().try_for_each(|ch| self.key_press(ch))
    }

    pub fn backspace(&mut self) -> Result<(), PageError> {
        let id = self.focused.ok_or(PageError::NoFocus)?;
        // The key still fires on an empty field.
        self.doc.values_mut().pop_char(id);
        self.fire(id, EventKind::KeyUp);
        Ok(())
    }

    /// Submit a form and return the name/value pairs it would send.
    ///
    /// Submit handlers run first, so cleared ghost text is not sent.
    pub fn submit(&mut self, form: Id) -> Result<Vec<(String, String)>, PageError> {
        if !self.doc.is_form(form) {
            return Err(PageError::NotAForm(form));
        }
        self.fire(form, EventKind::Submit);
        Ok(self.doc.form_data(form))
    }

    /// Remove an element from the page and release any ghost state under it.
    pub fn remove_element(&mut self, id: Id) -> Vec<Id> {
        let removed = self.doc.remove(id);
        if self.focused.is_some_and(|f| removed.contains(&f)) {
            self.focused = None;
        }
        let released = self.ghosts.prune(&self.doc);
        if released > 0 {
            log::debug!(target: "page", "released {released} ghost field(s)");
        }
        removed
    }

    fn fire(&mut self, target: Id, event: EventKind) {
        let bound = self.doc.listeners().bound(target, event).to_vec();
        log::trace!(target: "page", "{event:?} on {target:?} -> {} listener(s)", bound.len());
        for el in bound {
            self.ghosts.dispatch(&mut self.doc, el, event);
        }
    }
}
