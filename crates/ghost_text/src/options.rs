//! Configuration for a bound element.
//!
//! [`GhostOptions`] is a partial set of overrides: unset fields keep their
//! current (or default) value when merged. [`GhostConfig`] is the resolved,
//! stored configuration. [`GhostSettings`] is the plain-data subset that can
//! be deserialized, e.g. from a JSON options object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class applied while the ghost text is displayed, unless overridden.
pub const DEFAULT_GHOST_CLASS: &str = "ghost-text";

/// User hook invoked with the field value.
pub type Callback = Box<dyn FnMut(&str)>;

/// Resolved configuration for one bound element.
pub struct GhostConfig {
    pub ghost_text: String,
    pub ghost_class: String,
    pub clear_on_submit: bool,
    /// Explicit form identifier, as given (a leading `#` is allowed).
    pub parent_form: Option<String>,
    pub(crate) focus: Option<Callback>,
    pub(crate) blur: Option<Callback>,
    pub(crate) change: Option<Callback>,
}

impl GhostConfig {
    /// Defaults for an element whose value at bind time is `current_value`.
    pub fn defaults(current_value: &str) -> Self {
        Self {
            ghost_text: current_value.to_string(),
            ghost_class: DEFAULT_GHOST_CLASS.to_string(),
            clear_on_submit: true,
            parent_form: None,
            focus: None,
            blur: None,
            change: None,
        }
    }

    /// Shallow merge: every field set in `opts` replaces the stored one.
    pub fn merge(&mut self, opts: GhostOptions) {
        let GhostOptions {
            ghost_text,
            ghost_class,
            clear_on_submit,
            parent_form,
            focus,
            blur,
            change,
        } = opts;

        if let Some(v) = ghost_text {
            self.ghost_text = v;
        }
        if let Some(v) = ghost_class {
            self.ghost_class = v;
        }
        if let Some(v) = clear_on_submit {
            self.clear_on_submit = v;
        }
        if let Some(v) = parent_form {
            self.parent_form = v;
        }
        if let Some(v) = focus {
            self.focus = v;
        }
        if let Some(v) = blur {
            self.blur = v;
        }
        if let Some(v) = change {
            self.change = v;
        }
    }

    /// Form identifier with any leading `#` stripped.
    pub fn parent_form_id(&self) -> Option<&str> {
        self.parent_form
            .as_deref()
            .map(|id| id.trim_start_matches('#'))
            .filter(|id| !id.is_empty())
    }

    pub fn has_focus_hook(&self) -> bool {
        self.focus.is_some()
    }

    pub fn has_blur_hook(&self) -> bool {
        self.blur.is_some()
    }

    pub fn has_change_hook(&self) -> bool {
        self.change.is_some()
    }
}

impl fmt::Debug for GhostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostConfig")
            .field("ghost_text", &self.ghost_text)
            .field("ghost_class", &self.ghost_class)
            .field("clear_on_submit", &self.clear_on_submit)
            .field("parent_form", &self.parent_form)
            .field("focus", &self.focus.is_some())
            .field("blur", &self.blur.is_some())
            .field("change", &self.change.is_some())
            .finish()
    }
}

/// Partial configuration. Build with the chained setters:
///
/// ```
/// use ghost_text::GhostOptions;
///
/// let opts = GhostOptions::new()
///     .ghost_text("Search")
///     .clear_on_submit(false)
///     .on_change(|value| println!("typed {value}"));
/// assert!(!opts.is_empty());
/// ```
#[derive(Default)]
pub struct GhostOptions {
    ghost_text: Option<String>,
    ghost_class: Option<String>,
    clear_on_submit: Option<bool>,
    // Outer `None` leaves the stored value alone, inner `None` clears it.
    parent_form: Option<Option<String>>,
    focus: Option<Option<Callback>>,
    blur: Option<Option<Callback>>,
    change: Option<Option<Callback>>,
}

impl GhostOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ghost_text(mut self, text: impl Into<String>) -> Self {
        self.ghost_text = Some(text.into());
        self
    }

    pub fn ghost_class(mut self, class: impl Into<String>) -> Self {
        self.ghost_class = Some(class.into());
        self
    }

    pub fn clear_on_submit(mut self, clear: bool) -> Self {
        self.clear_on_submit = Some(clear);
        self
    }

    pub fn parent_form(mut self, id: impl Into<String>) -> Self {
        self.parent_form = Some(Some(id.into()));
        self
    }

    pub fn nearest_form(mut self) -> Self {
        self.parent_form = Some(None);
        self
    }

    pub fn on_focus(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.focus = Some(Some(Box::new(f)));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.blur = Some(Some(Box::new(f)));
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.change = Some(Some(Box::new(f)));
        self
    }

    pub fn without_focus_hook(mut self) -> Self {
        self.focus = Some(None);
        self
    }

    pub fn without_blur_hook(mut self) -> Self {
        self.blur = Some(None);
        self
    }

    pub fn without_change_hook(mut self) -> Self {
        self.change = Some(None);
        self
    }

    /// Returns `true` if merging these options would change nothing.
    pub fn is_empty(&self) -> bool {
        self.ghost_text.is_none()
            && self.ghost_class.is_none()
            && self.clear_on_submit.is_none()
            && self.parent_form.is_none()
            && self.focus.is_none()
            && self.blur.is_none()
            && self.change.is_none()
    }
}

impl fmt::Debug for GhostOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn hook(h: &Option<Option<Callback>>) -> Option<bool> {
            h.as_ref().map(Option::is_some)
        }

        f.debug_struct("GhostOptions")
            .field("ghost_text", &self.ghost_text)
            .field("ghost_class", &self.ghost_class)
            .field("clear_on_submit", &self.clear_on_submit)
            .field("parent_form", &self.parent_form)
            .field("focus", &hook(&self.focus))
            .field("blur", &hook(&self.blur))
            .field("change", &hook(&self.change))
            .finish()
    }
}

/// Plain-data options object, keyed the way page scripts spell them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GhostSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ghost_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ghost_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_on_submit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_form: Option<String>,
}

impl From<GhostSettings> for GhostOptions {
    fn from(s: GhostSettings) -> Self {
        GhostOptions {
            ghost_text: s.ghost_text,
            ghost_class: s.ghost_class,
            clear_on_submit: s.clear_on_submit,
            parent_form: s.parent_form.map(Some),
            ..GhostOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_take_current_value() {
        let cfg = GhostConfig::defaults("Search");
        assert_eq!(cfg.ghost_text, "Search");
        assert_eq!(cfg.ghost_class, DEFAULT_GHOST_CLASS);
        assert!(cfg.clear_on_submit);
        assert_eq!(cfg.parent_form, None);
        assert!(!cfg.has_focus_hook() && !cfg.has_blur_hook() && !cfg.has_change_hook());
    }

    #[test]
    fn merge_is_shallow() {
        let mut cfg = GhostConfig::defaults("Search");
        cfg.merge(GhostOptions::new().ghost_class("hint").on_blur(|_| {}));
        cfg.merge(GhostOptions::new().ghost_text("Find"));

        assert_eq!(cfg.ghost_text, "Find");
        assert_eq!(cfg.ghost_class, "hint");
        assert!(cfg.has_blur_hook());

        cfg.merge(GhostOptions::new().without_blur_hook());
        assert!(!cfg.has_blur_hook());
        assert_eq!(cfg.ghost_class, "hint");
    }

    #[test]
    fn parent_form_id_strips_hash() {
        let mut cfg = GhostConfig::defaults("");
        cfg.merge(GhostOptions::new().parent_form("#login"));
        assert_eq!(cfg.parent_form_id(), Some("login"));

        cfg.merge(GhostOptions::new().parent_form("#"));
        assert_eq!(cfg.parent_form_id(), None);

        cfg.merge(GhostOptions::new().parent_form("login").nearest_form());
        assert_eq!(cfg.parent_form, None);
    }

    #[test]
    fn settings_parse_camel_case_json() {
        let settings: GhostSettings = serde_json::from_str(
            r##"{"ghostText":"Email","clearOnSubmit":false,"parentForm":"#signup"}"##,
        )
        .unwrap();

        assert_eq!(settings.ghost_text.as_deref(), Some("Email"));
        assert_eq!(settings.clear_on_submit, Some(false));

        let mut cfg = GhostConfig::defaults("");
        cfg.merge(settings.into());
        assert_eq!(cfg.ghost_text, "Email");
        assert!(!cfg.clear_on_submit);
        assert_eq!(cfg.parent_form_id(), Some("signup"));
        assert_eq!(cfg.ghost_class, DEFAULT_GHOST_CLASS);
    }

    #[test]
    fn settings_reject_unknown_keys() {
        let err = serde_json::from_str::<GhostSettings>(r#"{"ghostTxt":"x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn empty_options_merge_is_noop() {
        assert!(GhostOptions::new().is_empty());
        assert!(GhostOptions::from(GhostSettings::default()).is_empty());
    }
}
