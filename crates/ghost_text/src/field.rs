use crate::host::{EventKind, GhostHost};
use crate::op::GhostOp;
use crate::options::{GhostConfig, GhostOptions};
use std::collections::HashMap;
use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostPhase {
    /// Marker applied, value equals the ghost text.
    ShowingGhost,
    /// Marker absent, value is user content (possibly empty).
    ShowingUser,
}

/// Stored state for one bound element.
#[derive(Debug)]
pub struct GhostFieldState<E> {
    pub config: GhostConfig,
    /// Form observed for submission, resolved once at attach time.
    pub form: Option<E>,
    pub phase: GhostPhase,
}

/// Registry of elements with ghost text behavior.
///
/// Owns one [`GhostFieldState`] per bound element. Elements themselves are
/// owned by the host; state for removed elements is dropped by
/// [`detach`](Self::detach) or [`prune`](Self::prune).
pub struct GhostField<H: GhostHost> {
    states: HashMap<H::Element, GhostFieldState<H::Element>>,
}

impl<H: GhostHost> Default for GhostField<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: GhostHost> fmt::Debug for GhostField<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostField")
            .field("states", &self.states)
            .finish()
    }
}

impl<H: GhostHost> GhostField<H> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    pub fn is_attached(&self, el: H::Element) -> bool {
        self.states.contains_key(&el)
    }

    pub fn state(&self, el: H::Element) -> Option<&GhostFieldState<H::Element>> {
        self.states.get(&el)
    }

    pub fn config(&self, el: H::Element) -> Option<&GhostConfig> {
        self.states.get(&el).map(|s| &s.config)
    }

    pub fn phase(&self, el: H::Element) -> Option<GhostPhase> {
        self.states.get(&el).map(|s| s.phase)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Run a typed operation request against one element.
    pub fn apply(&mut self, host: &mut H, el: H::Element, op: GhostOp) {
        match op {
            GhostOp::Attach(opts) => self.attach(host, el, opts),
            GhostOp::UpdateConfig(opts) => self.update_config(el, opts),
            GhostOp::FormSubmit => self.on_form_submit(host, el),
            GhostOp::Focus => self.on_focus(host, el),
            GhostOp::Blur => self.on_blur(host, el),
            GhostOp::Change => self.on_change(host, el),
        }
    }

    /// Bind the behavior to `el`.
    ///
    /// Re-attaching an element replaces its configuration with fresh
    /// defaults merged with `opts`.
    pub fn attach(&mut self, host: &mut H, el: H::Element, opts: GhostOptions) {
        let value = host.value(el).unwrap_or_default().to_string();
        let mut config = GhostConfig::defaults(&value);
        config.merge(opts);

        let form = if config.clear_on_submit {
            match config.parent_form_id() {
                Some(id) => host.form_by_id(id),
                None => host.closest_form(el),
            }
        } else {
            None
        };

        if let Some(form) = form {
            host.subscribe(form, EventKind::Submit, el);
        }
        host.subscribe(el, EventKind::Focus, el);
        host.subscribe(el, EventKind::Blur, el);
        host.subscribe(el, EventKind::KeyUp, el);

        let phase = if value == config.ghost_text {
            host.add_class(el, &config.ghost_class);
            GhostPhase::ShowingGhost
        } else {
            host.remove_class(el, &config.ghost_class);
            GhostPhase::ShowingUser
        };

        log::debug!(
            target: "ghost_text",
            "attach {el:?}: ghost={:?} form={form:?} phase={phase:?}",
            config.ghost_text
        );

        self.states.insert(
            el,
            GhostFieldState {
                config,
                form,
                phase,
            },
        );
    }

    /// Bind every element in a selection.
    ///
    /// `make_opts` is called once per element since options own their hooks.
    pub fn attach_all(
        &mut self,
        host: &mut H,
        elements: impl IntoIterator<Item = H::Element>,
        mut make_opts: impl FnMut() -> GhostOptions,
    ) {
        for el in elements {
            self.attach(host, el, make_opts());
        }
    }

    /// Shallow-merge `opts` into the stored configuration.
    ///
    /// Events are not re-bound and the displayed value and marker are left
    /// as they are.
    pub fn update_config(&mut self, el: H::Element, opts: GhostOptions) {
        let Some(state) = self.states.get_mut(&el) else {
            log::debug!(target: "ghost_text", "update_config on unbound {el:?}");
            return;
        };
        state.config.merge(opts);
    }

    /// Clear a value that still equals the ghost text. The marker is left
    /// alone: the page is about to submit. The field now holds no ghost text,
    /// so the phase moves to `ShowingUser`.
    pub fn on_form_submit(&mut self, host: &mut H, el: H::Element) {
        let Some(state) = self.states.get_mut(&el) else {
            log::debug!(target: "ghost_text", "submit on unbound {el:?}");
            return;
        };

        if host.value(el) == Some(state.config.ghost_text.as_str()) {
            log::trace!(target: "ghost_text", "submit {el:?}: clearing ghost text");
            host.set_value(el, "");
            state.phase = GhostPhase::ShowingUser;
        }
    }

    pub fn on_focus(&mut self, host: &mut H, el: H::Element) {
        let Some(state) = self.states.get_mut(&el) else {
            log::debug!(target: "ghost_text", "focus on unbound {el:?}");
            return;
        };

        let value = host.value(el).unwrap_or_default().to_string();
        if value == state.config.ghost_text {
            host.set_value(el, "");
            host.remove_class(el, &state.config.ghost_class);
            state.phase = GhostPhase::ShowingUser;
            log::trace!(target: "ghost_text", "focus {el:?}: ShowingGhost -> ShowingUser");
        }

        if let Some(hook) = state.config.focus.as_mut() {
            hook(&value);
        }
    }

    pub fn on_blur(&mut self, host: &mut H, el: H::Element) {
        let Some(state) = self.states.get_mut(&el) else {
            log::debug!(target: "ghost_text", "blur on unbound {el:?}");
            return;
        };

        let value = host.value(el).unwrap_or_default().to_string();
        if is_blank(&value) || value == state.config.ghost_text {
            host.set_value(el, &state.config.ghost_text);
            host.add_class(el, &state.config.ghost_class);
            if state.phase != GhostPhase::ShowingGhost {
                log::trace!(target: "ghost_text", "blur {el:?}: ShowingUser -> ShowingGhost");
            }
            state.phase = GhostPhase::ShowingGhost;
        }

        if let Some(hook) = state.config.blur.as_mut() {
            hook(&value);
        }
    }

    pub fn on_change(&mut self, host: &mut H, el: H::Element) {
        let Some(state) = self.states.get_mut(&el) else {
            log::debug!(target: "ghost_text", "change on unbound {el:?}");
            return;
        };

        if let Some(hook) = state.config.change.as_mut() {
            hook(host.value(el).unwrap_or_default());
        }
    }

    /// Route a host notification delivered for the bound element `el`.
    ///
    /// Submit clears only while `clear_on_submit` is still set; an explicit
    /// [`GhostOp::FormSubmit`] always runs.
    pub fn dispatch(&mut self, host: &mut H, el: H::Element, event: EventKind) {
        match event {
            EventKind::Focus => self.on_focus(host, el),
            EventKind::Blur => self.on_blur(host, el),
            EventKind::KeyUp => self.on_change(host, el),
            EventKind::Submit => {
                if self
                    .states
                    .get(&el)
                    .is_some_and(|s| s.config.clear_on_submit)
                {
                    self.on_form_submit(host, el);
                }
            }
        }
    }

    /// Forget an element. Returns `true` if it was bound.
    pub fn detach(&mut self, el: H::Element) -> bool {
        let removed = self.states.remove(&el).is_some();
        if removed {
            log::debug!(target: "ghost_text", "detach {el:?}");
        }
        removed
    }

    /// Drop state for every element the host no longer holds.
    pub fn prune(&mut self, host: &H) -> usize {
        let before = self.states.len();
        self.states.retain(|el, _| host.is_connected(*el));
        before - self.states.len()
    }
}

/// Empty or whitespace only, using the ECMAScript `\s` set: Unicode
/// `White_Space` plus U+FEFF, minus U+0085.
fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|c| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}
