use dom::Id;
use ghost_text::EventKind;
use std::collections::HashMap;

/// Which bound elements want to hear about an event on a target.
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    by_target: HashMap<(Id, EventKind), Vec<Id>>,
}

impl ListenerTable {
    /// Returns `false` if the subscription already existed.
    pub fn subscribe(&mut self, target: Id, event: EventKind, bound: Id) -> bool {
        let list = self.by_target.entry((target, event)).or_default();
        if list.contains(&bound) {
            return false;
        }
        list.push(bound);
        true
    }

    /// Bound elements in subscription order.
    pub fn bound(&self, target: Id, event: EventKind) -> &[Id] {
        self.by_target
            .get(&(target, event))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Forget every subscription that mentions one of `ids`, as target or
    /// as bound element.
    pub fn remove_nodes(&mut self, ids: &[Id]) {
        self.by_target.retain(|(target, _), bound| {
            if ids.contains(target) {
                return false;
            }
            bound.retain(|b| !ids.contains(b));
            !bound.is_empty()
        });
    }

    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }
}
