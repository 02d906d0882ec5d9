// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reasons a structural edit was refused.
//!
//! The boolean API ([`Tree::set_child_at`](crate::Tree::set_child_at),
//! [`Tree::move_to`](crate::Tree::move_to)) folds these into `false`, except for an
//! out-of-range slot index which panics there. The `try_` forms return them as-is.

use thiserror::Error;

use crate::types::NodeId;

/// Why [`Tree::try_set_child_at`](crate::Tree::try_set_child_at) refused an edit.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// The slot index is not below the node's child count.
    #[error("child slot index {index} out of range for {count} slots")]
    IndexOutOfRange {
        /// Requested slot.
        index: usize,
        /// Slot count of the variant.
        count: usize,
    },

    /// A node id does not refer to a live node.
    #[error("node {0:?} is not alive")]
    DeadNode(NodeId),

    /// The child is the parent itself or one of its ancestors.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Node whose slot was targeted.
        parent: NodeId,
        /// Node that would have been attached.
        child: NodeId,
    },
}

/// Why [`Tree::try_move_to`](crate::Tree::try_move_to) refused a relocation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No destination parent was given.
    #[error("no destination parent")]
    NoTarget,

    /// The node is already a child of the destination parent.
    #[error("node {node:?} is already a child of {parent:?}")]
    SameParent {
        /// Node to relocate.
        node: NodeId,
        /// Its current and requested parent.
        parent: NodeId,
    },

    /// The destination slot is out of range and dynamic slots were not requested.
    #[error("destination slot {index} out of range for {count} slots")]
    IndexOutOfRange {
        /// Requested slot.
        index: usize,
        /// Slot count of the variant.
        count: usize,
    },

    /// A node id does not refer to a live node.
    #[error("node {0:?} is not alive")]
    DeadNode(NodeId),

    /// The destination is the node itself or one of its descendants.
    #[error("moving {node:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Node to relocate.
        node: NodeId,
        /// Requested parent.
        parent: NodeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        let e = SlotError::IndexOutOfRange { index: 9, count: 4 };
        assert_eq!(e.to_string(), "child slot index 9 out of range for 4 slots");
        let e = MoveError::IndexOutOfRange { index: 5, count: 5 };
        assert_eq!(e.to_string(), "destination slot 5 out of range for 5 slots");
        assert_eq!(MoveError::NoTarget.to_string(), "no destination parent");
    }
}
