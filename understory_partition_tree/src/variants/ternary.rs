// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Tree whose nodes have left, middle and right children.
pub type TernaryTree<D> = Tree<D, TernaryTreeZone>;

/// Child slots of a [`TernaryTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TernaryTreeZone {
    /// Slot `0`.
    Left,
    /// Slot `1`.
    Middle,
    /// Slot `2`.
    Right,
}

impl Zone for TernaryTreeZone {
    type Slots = [Option<NodeId>; 3];

    const ALL: &'static [Self] = &[Self::Left, Self::Middle, Self::Right];

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl<D> Tree<D, TernaryTreeZone> {
    /// Left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, TernaryTreeZone::Left)
    }

    /// Middle child of `id`.
    pub fn middle(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, TernaryTreeZone::Middle)
    }

    /// Right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, TernaryTreeZone::Right)
    }

    /// Store `child` as the left child of `id`.
    pub fn set_left(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, TernaryTreeZone::Left, child)
    }

    /// Store `child` as the middle child of `id`.
    pub fn set_middle(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, TernaryTreeZone::Middle, child)
    }

    /// Store `child` as the right child of `id`.
    pub fn set_right(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, TernaryTreeZone::Right, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_slots_map_to_ordinals() {
        let mut tree: TernaryTree<u8> = TernaryTree::new();
        let root = tree.create_node();
        let m = tree.create_node();
        assert!(tree.set_middle(root, Some(m)));
        assert_eq!(tree.child_at(root, 1), Some(m));
        assert_eq!(tree.middle(root), Some(m));
        assert_eq!(tree.left(root), None);
        assert_eq!(tree.right(root), None);
        assert!(tree.set_middle(root, None));
        assert!(tree.is_leaf(root));
    }

    #[test]
    fn zones_cover_every_slot() {
        assert_eq!(TernaryTreeZone::ALL.len(), TernaryTree::<u8>::CHILD_COUNT);
        for (i, z) in TernaryTreeZone::ALL.iter().enumerate() {
            assert_eq!(z.ordinal(), i);
        }
    }
}
