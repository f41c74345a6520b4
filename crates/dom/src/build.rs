//! Tree construction helpers. Ids are left at zero; run
//! [`assign_node_ids`](crate::assign_node_ids) on the finished tree.

use crate::{Id, Node};

pub fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(0),
        children,
    }
}

pub fn elem(name: &str, attributes: Vec<(&str, &str)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes: attributes
            .into_iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        children,
    }
}

pub fn input(ty: &str, extra_attrs: Vec<(&str, &str)>) -> Node {
    let mut attributes = vec![("type", ty)];
    attributes.extend(extra_attrs);
    elem("input", attributes, Vec::new())
}

pub fn form(dom_id: &str, children: Vec<Node>) -> Node {
    elem("form", vec![("id", dom_id)], children)
}

pub fn text(text: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: text.to_string(),
    }
}
