// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Tree whose nodes have a left and a right child.
pub type BinaryTree<D> = Tree<D, BinaryTreeZone>;

/// Child slots of a [`BinaryTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum BinaryTreeZone {
    /// Slot `0`.
    Left,
    /// Slot `1`.
    Right,
}

impl Zone for BinaryTreeZone {
    type Slots = [Option<NodeId>; 2];

    const ALL: &'static [Self] = &[Self::Left, Self::Right];

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl<D> Tree<D, BinaryTreeZone> {
    /// Left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, BinaryTreeZone::Left)
    }

    /// Right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, BinaryTreeZone::Right)
    }

    /// Store `child` as the left child of `id`.
    pub fn set_left(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, BinaryTreeZone::Left, child)
    }

    /// Store `child` as the right child of `id`.
    pub fn set_right(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, BinaryTreeZone::Right, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right() {
        let mut tree: BinaryTree<()> = BinaryTree::new();
        let root = tree.create_node();
        let l = tree.create_node();
        let r = tree.create_node();
        assert!(tree.set_left(root, Some(l)));
        assert!(tree.set_right(root, Some(r)));
        assert_eq!(tree.left(root), Some(l));
        assert_eq!(tree.right(root), Some(r));
        assert_eq!(tree.zone(r), Some(BinaryTreeZone::Right));

        // Swapping sides detaches from the old slot first.
        assert!(tree.set_left(root, Some(r)));
        assert_eq!(tree.left(root), Some(r));
        assert_eq!(tree.right(root), None);
        assert_eq!(tree.parent(l), None);
        assert_eq!(tree.not_null_child_count(root), 1);
    }

    #[test]
    fn zones_cover_every_slot() {
        assert_eq!(BinaryTreeZone::ALL.len(), BinaryTree::<()>::CHILD_COUNT);
        assert_eq!(BinaryTreeZone::from_index(1), Some(BinaryTreeZone::Right));
        assert_eq!(BinaryTreeZone::from_index(2), None);
    }
}
