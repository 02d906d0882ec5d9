// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iterators over children, ancestors, and whole subtrees.
//!
//! All iterators borrow the tree, so the structure cannot change while they run. They are
//! restartable by calling the producing method again.

use alloc::vec::Vec;

use crate::slots::ChildSlots;
use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Occupied child slots of one node, in slot order.
///
/// Returned by [`Tree::children`].
#[derive(Clone, Debug)]
pub struct Children<'a, S> {
    slots: Option<&'a S>,
    index: usize,
}

impl<'a, S: ChildSlots> Children<'a, S> {
    pub(crate) fn new(slots: Option<&'a S>) -> Self {
        Self { slots, index: 0 }
    }
}

impl<S: ChildSlots> Iterator for Children<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let slots = self.slots?;
        while self.index < S::COUNT {
            let i = self.index;
            self.index += 1;
            if let Some(child) = slots.get(i) {
                return Some(child);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.slots {
            Some(_) => (0, Some(S::COUNT - self.index)),
            None => (0, Some(0)),
        }
    }
}

/// Parent chain of a node, nearest first.
///
/// Returned by [`Tree::ancestors`].
pub struct Ancestors<'a, D, Z: Zone> {
    tree: &'a Tree<D, Z>,
    next: Option<NodeId>,
}

impl<'a, D, Z: Zone> Ancestors<'a, D, Z> {
    pub(crate) fn new(tree: &'a Tree<D, Z>, id: NodeId) -> Self {
        Self {
            tree,
            next: tree.parent(id),
        }
    }
}

impl<D, Z: Zone> Iterator for Ancestors<'_, D, Z> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.parent(id);
        Some(id)
    }
}

impl<D, Z: Zone> core::fmt::Debug for Ancestors<'_, D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ancestors")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Depth-first pre-order walk: a node, then each child subtree in slot order.
///
/// Returned by [`Tree::prefix_nodes`].
pub struct PrefixNodes<'a, D, Z: Zone> {
    tree: &'a Tree<D, Z>,
    stack: Vec<NodeId>,
}

impl<D, Z: Zone> Iterator for PrefixNodes<'_, D, Z> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.node_opt(id) {
            for i in (0..Tree::<D, Z>::CHILD_COUNT).rev() {
                if let Some(child) = node.children.get(i) {
                    self.stack.push(child);
                }
            }
        }
        Some(id)
    }
}

impl<D, Z: Zone> core::fmt::Debug for PrefixNodes<'_, D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrefixNodes")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Depth-first post-order walk: each child subtree in slot order, then the node.
///
/// Returned by [`Tree::postfix_nodes`].
pub struct PostfixNodes<'a, D, Z: Zone> {
    tree: &'a Tree<D, Z>,
    // (node, children already pushed)
    stack: Vec<(NodeId, bool)>,
}

impl<D, Z: Zone> Iterator for PostfixNodes<'_, D, Z> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(id);
            }
            self.stack.push((id, true));
            if let Some(node) = self.tree.node_opt(id) {
                for i in (0..Tree::<D, Z>::CHILD_COUNT).rev() {
                    if let Some(child) = node.children.get(i) {
                        self.stack.push((child, false));
                    }
                }
            }
        }
    }
}

impl<D, Z: Zone> core::fmt::Debug for PostfixNodes<'_, D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PostfixNodes")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// User data of a subtree, node by node in pre-order.
///
/// Returned by [`Tree::prefix_user_data`].
pub struct PrefixUserData<'a, D, Z: Zone> {
    nodes: PrefixNodes<'a, D, Z>,
    current: core::slice::Iter<'a, D>,
}

impl<'a, D, Z: Zone> Iterator for PrefixUserData<'a, D, Z> {
    type Item = &'a D;

    fn next(&mut self) -> Option<&'a D> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            let id = self.nodes.next()?;
            self.current = self.nodes.tree.user_data(id).iter();
        }
    }
}

impl<D, Z: Zone> core::fmt::Debug for PrefixUserData<'_, D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrefixUserData")
            .field("nodes", &self.nodes)
            .field("remaining_here", &self.current.len())
            .finish()
    }
}

impl<D, Z: Zone> Tree<D, Z> {
    /// Walk the subtree rooted at `id` in pre-order. Empty for a stale id.
    pub fn prefix_nodes(&self, id: NodeId) -> PrefixNodes<'_, D, Z> {
        let mut stack = Vec::new();
        if self.is_alive(id) {
            stack.push(id);
        }
        PrefixNodes { tree: self, stack }
    }

    /// Walk the subtree rooted at `id` in post-order. Empty for a stale id.
    pub fn postfix_nodes(&self, id: NodeId) -> PostfixNodes<'_, D, Z> {
        let mut stack = Vec::new();
        if self.is_alive(id) {
            stack.push((id, false));
        }
        PostfixNodes { tree: self, stack }
    }

    /// Every user data value of the subtree rooted at `id`, in pre-order.
    pub fn prefix_user_data(&self, id: NodeId) -> PrefixUserData<'_, D, Z> {
        PrefixUserData {
            nodes: self.prefix_nodes(id),
            current: core::slice::Iter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{NodeId, TernaryTree};
    use alloc::vec;
    use alloc::vec::Vec;

    //        r
    //      / | \
    //     a  .  b
    //    /|\
    //   . c d
    fn sample() -> (TernaryTree<&'static str>, [NodeId; 5]) {
        let mut tree = TernaryTree::new();
        let r = tree.create_node_with("r");
        let a = tree.create_node_from(["a1", "a2"]);
        let b = tree.create_node_with("b");
        let c = tree.create_node();
        let d = tree.create_node_with("d");
        tree.set_child_at(r, 0, Some(a));
        tree.set_child_at(r, 2, Some(b));
        tree.set_child_at(a, 1, Some(c));
        tree.set_child_at(a, 2, Some(d));
        (tree, [r, a, b, c, d])
    }

    #[test]
    fn children_skip_empty_slots() {
        let (tree, [r, a, b, c, d]) = sample();
        assert_eq!(tree.children(r).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.children(a).collect::<Vec<_>>(), vec![c, d]);
        assert_eq!(tree.children(d).count(), 0);
        assert_eq!(tree.children_array(r), vec![Some(a), None, Some(b)]);
        // Restartable.
        assert_eq!(tree.children(r).count(), 2);
    }

    #[test]
    fn prefix_and_postfix_orders() {
        let (tree, [r, a, b, c, d]) = sample();
        assert_eq!(tree.prefix_nodes(r).collect::<Vec<_>>(), vec![r, a, c, d, b]);
        assert_eq!(tree.postfix_nodes(r).collect::<Vec<_>>(), vec![c, d, a, b, r]);
        assert_eq!(tree.prefix_nodes(a).collect::<Vec<_>>(), vec![a, c, d]);
    }

    #[test]
    fn prefix_user_data_flattens_in_node_order() {
        let (tree, [r, a, ..]) = sample();
        let all: Vec<_> = tree.prefix_user_data(r).copied().collect();
        assert_eq!(all, vec!["r", "a1", "a2", "d", "b"]);
        let sub: Vec<_> = tree.prefix_user_data(a).copied().collect();
        assert_eq!(sub, vec!["a1", "a2", "d"]);
    }

    #[test]
    fn stale_root_yields_nothing() {
        let (mut tree, [r, a, ..]) = sample();
        tree.remove(a);
        assert_eq!(tree.prefix_nodes(a).count(), 0);
        assert_eq!(tree.postfix_nodes(a).count(), 0);
        assert_eq!(tree.prefix_user_data(r).count(), 2);
    }
}
