//! Attribute and class-list helpers for element nodes.

use crate::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputControlType {
    Text,
    TextArea,
    Other,
}

impl InputControlType {
    /// Controls that hold a free-form text value.
    pub fn is_text_like(self) -> bool {
        matches!(self, InputControlType::Text | InputControlType::TextArea)
    }
}

pub fn input_control_type(node: &Node) -> InputControlType {
    let Node::Element { name, .. } = node else {
        return InputControlType::Other;
    };

    if name.eq_ignore_ascii_case("textarea") {
        return InputControlType::TextArea;
    }
    if !name.eq_ignore_ascii_case("input") {
        return InputControlType::Other;
    }

    let ty = attr(node, "type").map(str::trim).filter(|s| !s.is_empty());

    match ty {
        None => InputControlType::Text, // missing type defaults to text
        Some(t)
            if ["text", "search", "email", "url", "tel", "password"]
                .iter()
                .any(|k| t.eq_ignore_ascii_case(k)) =>
        {
            InputControlType::Text
        }
        _ => InputControlType::Other,
    }
}

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

/// Set (or overwrite) an attribute value. Returns `false` for non-elements.
pub fn set_attr(node: &mut Node, name: &str, value: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };

    match attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        Some((_, v)) => *v = Some(value.to_string()),
        None => attributes.push((name.to_string(), Some(value.to_string()))),
    }
    true
}

pub fn remove_attr(node: &mut Node, name: &str) {
    if let Node::Element { attributes, .. } = node {
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }
}

/// Class names are case-sensitive and whitespace separated.
pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class").is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

/// Returns `true` if the class was added.
pub fn add_class(node: &mut Node, class: &str) -> bool {
    if class.is_empty() || has_class(node, class) {
        return false;
    }

    let mut list = attr(node, "class").unwrap_or_default().trim().to_string();
    if !list.is_empty() {
        list.push(' ');
    }
    list.push_str(class);
    set_attr(node, "class", &list)
}

/// Returns `true` if the class was present and removed.
pub fn remove_class(node: &mut Node, class: &str) -> bool {
    if !has_class(node, class) {
        return false;
    }

    let list = attr(node, "class")
        .unwrap_or_default()
        .split_whitespace()
        .filter(|c| *c != class)
        .collect::<Vec<_>>()
        .join(" ");

    if list.is_empty() {
        remove_attr(node, "class");
        true
    } else {
        set_attr(node, "class", &list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{elem, input};

    #[test]
    fn missing_type_is_text() {
        let node = elem("input", Vec::new(), Vec::new());
        assert_eq!(input_control_type(&node), InputControlType::Text);
    }

    #[test]
    fn checkbox_is_not_text_like() {
        let node = input("checkbox", Vec::new());
        assert!(!input_control_type(&node).is_text_like());
        assert!(input_control_type(&input("Search", Vec::new())).is_text_like());
    }

    #[test]
    fn class_list_add_and_remove() {
        let mut node = elem("input", vec![("class", "wide")], Vec::new());

        assert!(add_class(&mut node, "ghost-text"));
        assert!(!add_class(&mut node, "ghost-text"));
        assert_eq!(attr(&node, "class"), Some("wide ghost-text"));

        assert!(remove_class(&mut node, "wide"));
        assert_eq!(attr(&node, "class"), Some("ghost-text"));

        assert!(remove_class(&mut node, "ghost-text"));
        assert_eq!(attr(&node, "class"), None);
        assert!(!remove_class(&mut node, "ghost-text"));
    }

    #[test]
    fn class_match_is_whole_token() {
        let node = elem("input", vec![("class", "ghost-text-large")], Vec::new());
        assert!(!has_class(&node, "ghost-text"));
    }
}
