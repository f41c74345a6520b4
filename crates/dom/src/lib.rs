pub mod attrs;
pub mod build;
pub mod traverse;

mod types;

pub use attrs::{InputControlType, attr, has_class, input_control_type};
pub use traverse::{assign_node_ids, closest_ancestor, find_element_by_dom_id, find_node_by_id};
pub use types::{Id, Node, NodeId};
