use crate::attrs::attr;
use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        let needs_id = node.id() == Id(0);

        if needs_id {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// First element in document order whose `id` attribute equals `dom_id`.
pub fn find_element_by_dom_id(node: &Node, dom_id: &str) -> Option<Id> {
    if matches!(node, Node::Element { .. }) && attr(node, "id") == Some(dom_id) {
        return Some(node.id());
    }
    node.children()
        .iter()
        .find_map(|c| find_element_by_dom_id(c, dom_id))
}

/// Ids from the root down to (excluding) the target node.
///
/// Returns `None` if the target is not in the tree.
pub fn ancestor_path(root: &Node, target: Id) -> Option<Vec<Id>> {
    fn walk(node: &Node, target: Id, path: &mut Vec<Id>) -> bool {
        if node.id() == target {
            return true;
        }
        path.push(node.id());
        for c in node.children() {
            if walk(c, target, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, target, &mut path).then_some(path)
}

/// Nearest strict ancestor element of `target` with the given tag name.
pub fn closest_ancestor(root: &Node, target: Id, tag: &str) -> Option<Id> {
    let path = ancestor_path(root, target)?;
    path.into_iter().rev().find(|&id| {
        find_node_by_id(root, id)
            .and_then(Node::tag_name)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    })
}

/// Detach the subtree rooted at `target`. The root itself cannot be removed.
pub fn remove_node(root: &mut Node, target: Id) -> Option<Node> {
    let children = root.children_mut()?;
    if let Some(pos) = children.iter().position(|c| c.id() == target) {
        return Some(children.remove(pos));
    }
    children.iter_mut().find_map(|c| remove_node(c, target))
}

/// Visit every node id in the subtree, in document order.
pub fn collect_ids(node: &Node, out: &mut Vec<Id>) {
    out.push(node.id());
    for c in node.children() {
        collect_ids(c, out);
    }
}
