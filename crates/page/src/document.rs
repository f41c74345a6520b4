use crate::input_store::InputValueStore;
use crate::listeners::ListenerTable;
use dom::attrs::{self, InputControlType};
use dom::traverse::{self, collect_ids};
use dom::{Id, Node};
use ghost_text::{EventKind, GhostHost};

/// DOM tree plus the live state a page keeps next to it.
#[derive(Debug)]
pub struct Document {
    root: Node,
    values: InputValueStore,
    listeners: ListenerTable,
}

impl Document {
    /// Take ownership of a tree, assign ids and seed text control values
    /// from their markup.
    pub fn new(mut root: Node) -> Self {
        traverse::assign_node_ids(&mut root);
        let mut values = InputValueStore::new();
        seed_values(&mut values, &root);
        Self {
            root,
            values,
            listeners: ListenerTable::default(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        traverse::find_node_by_id(&self.root, id)
    }

    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn is_text_control(&self, id: Id) -> bool {
        self.node(id)
            .is_some_and(|n| attrs::input_control_type(n).is_text_like())
    }

    /// Whether the element currently carries `class`.
    pub fn has_class(&self, id: Id, class: &str) -> bool {
        self.node(id).is_some_and(|n| attrs::has_class(n, class))
    }

    pub fn is_form(&self, id: Id) -> bool {
        self.node(id)
            .and_then(Node::tag_name)
            .is_some_and(|name| name.eq_ignore_ascii_case("form"))
    }

    pub fn values(&self) -> &InputValueStore {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut InputValueStore {
        &mut self.values
    }

    /// Resolve a simple selector: `#id`, `.class` or a tag name.
    /// Matches are returned in document order.
    pub fn select(&self, selector: &str) -> Vec<Id> {
        let selector = selector.trim();
        let mut out = Vec::new();
        if let Some(dom_id) = selector.strip_prefix('#') {
            out.extend(traverse::find_element_by_dom_id(&self.root, dom_id));
            return out;
        }

        fn walk(node: &Node, selector: &str, out: &mut Vec<Id>) {
            let hit = match selector.strip_prefix('.') {
                Some(class) => attrs::has_class(node, class),
                None => node
                    .tag_name()
                    .is_some_and(|n| n.eq_ignore_ascii_case(selector)),
            };
            if hit {
                out.push(node.id());
            }
            for c in node.children() {
                walk(c, selector, out);
            }
        }

        if !selector.is_empty() {
            walk(&self.root, selector, &mut out);
        }
        out
    }

    /// Name/value pairs a form would submit: named text controls inside it.
    pub fn form_data(&self, form: Id) -> Vec<(String, String)> {
        let Some(node) = self.node(form) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        collect_ids(node, &mut ids);
        ids.into_iter()
            .filter_map(|id| {
                let n = self.node(id)?;
                if !attrs::input_control_type(n).is_text_like() {
                    return None;
                }
                let name = attrs::attr(n, "name")?;
                Some((name.to_string(), self.values.get(id).unwrap_or_default().to_string()))
            })
            .collect()
    }

    /// Remove an element and everything under it, dropping its values and
    /// subscriptions. Returns the removed ids.
    pub fn remove(&mut self, id: Id) -> Vec<Id> {
        let Some(removed) = traverse::remove_node(&mut self.root, id) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        collect_ids(&removed, &mut ids);
        for &id in &ids {
            self.values.remove(id);
        }
        self.listeners.remove_nodes(&ids);
        log::debug!(target: "page", "removed {} node(s) under {id:?}", ids.len());
        ids
    }
}

fn seed_values(store: &mut InputValueStore, node: &Node) {
    match attrs::input_control_type(node) {
        InputControlType::Text => {
            let initial = attrs::attr(node, "value").unwrap_or_default();
            store.seed(node.id(), initial.to_string());
        }
        InputControlType::TextArea => {
            let mut text = String::new();
            for c in node.children() {
                if let Node::Text { text: t, .. } = c {
                    text.push_str(t);
                }
            }
            store.seed(node.id(), text);
        }
        InputControlType::Other => {}
    }

    for c in node.children() {
        seed_values(store, c);
    }
}

impl GhostHost for Document {
    type Element = Id;

    fn value(&self, el: Id) -> Option<&str> {
        self.values.get(el)
    }

    fn set_value(&mut self, el: Id, value: &str) {
        self.values.set(el, value.to_string());
    }

    fn add_class(&mut self, el: Id, class: &str) {
        if let Some(n) = traverse::find_node_by_id_mut(&mut self.root, el) {
            attrs::add_class(n, class);
        }
    }

    fn remove_class(&mut self, el: Id, class: &str) {
        if let Some(n) = traverse::find_node_by_id_mut(&mut self.root, el) {
            attrs::remove_class(n, class);
        }
    }

    fn form_by_id(&self, id: &str) -> Option<Id> {
        traverse::find_element_by_dom_id(&self.root, id).filter(|&f| self.is_form(f))
    }

    fn closest_form(&self, el: Id) -> Option<Id> {
        traverse::closest_ancestor(&self.root, el, "form")
    }

    fn subscribe(&mut self, target: Id, event: EventKind, bound: Id) {
        if self.listeners.subscribe(target, event, bound) {
            log::trace!(target: "page", "subscribe {bound:?} to {event:?} on {target:?}");
        }
    }

    fn is_connected(&self, el: Id) -> bool {
        self.node(el).is_some()
    }
}
