//! Chain nodes and the chain walker.
//!
//! Nodes live in a generational arena; a chain is the slot's head link
//! followed through each node's `next`. A link is a `DefaultKey` into the
//! arena, so a chain never owns memory directly and unlinking cannot
//! dangle.

use slotmap::{DefaultKey, SlotMap};

pub(crate) type Link = Option<DefaultKey>;

#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: u32,
    pub(crate) value: V,
    pub(crate) next: Link,
}

/// Where a matching node hangs in its chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Position {
    /// The slot head points at the node.
    Head,
    /// The given predecessor's `next` points at the node.
    After(DefaultKey),
}

/// A found node and how it is linked.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Found {
    pub(crate) node: DefaultKey,
    pub(crate) position: Position,
}

/// Head-to-tail walk over one chain, yielding each node's arena key
/// together with its predecessor.
pub(crate) struct Chain<'a, V> {
    nodes: &'a SlotMap<DefaultKey, Entry<V>>,
    prev: Option<DefaultKey>,
    cur: Link,
}

impl<'a, V> Chain<'a, V> {
    pub(crate) fn new(nodes: &'a SlotMap<DefaultKey, Entry<V>>, head: Link) -> Self {
        Self {
            nodes,
            prev: None,
            cur: head,
        }
    }

    /// First node with `key` in traversal order.
    pub(crate) fn locate(mut self, key: u32) -> Option<Found> {
        self.find_map(|(found, entry)| (entry.key == key).then_some(found))
    }
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (Found, &'a Entry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        let entry = self.nodes.get(node);
        debug_assert!(entry.is_some(), "chain link names a freed node");
        let entry = entry?;
        let position = match self.prev {
            None => Position::Head,
            Some(p) => Position::After(p),
        };
        self.prev = Some(node);
        self.cur = entry.next;
        Some((Found { node, position }, entry))
    }
}
