// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Tree whose nodes have five children.
pub type PentaTree<D> = Tree<D, PentaTreeZone>;

/// Child slots of a [`PentaTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PentaTreeZone {
    /// Slot `0`.
    First,
    /// Slot `1`.
    Second,
    /// Slot `2`.
    Third,
    /// Slot `3`.
    Fourth,
    /// Slot `4`.
    Fifth,
}

impl Zone for PentaTreeZone {
    type Slots = [Option<NodeId>; 5];

    const ALL: &'static [Self] = &[
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifth_slot_is_last() {
        let mut tree: PentaTree<u16> = PentaTree::new();
        let root = tree.create_node();
        let k = tree.create_node_with(5);
        assert!(tree.set_child(root, PentaTreeZone::Fifth, Some(k)));
        assert_eq!(tree.index_of(root, k), Some(4));
        assert_eq!(tree.zone_of(root, k), Some(PentaTreeZone::Fifth));
        assert_eq!(PentaTreeZone::ALL.len(), tree.child_count());
        assert_eq!(PentaTreeZone::from_index(5), None);
    }
}
