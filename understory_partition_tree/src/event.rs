// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications and the listener contract.
//!
//! ## Overview
//!
//! Every successful edit of a [`Tree`](crate::Tree) produces one or more
//! [`TreeNodeEvent`]s. An event is first delivered to the listeners registered on the node
//! where it was raised, then to the listeners of that node's parent, and so on up to the
//! root. A listener therefore observes every change in the subtree it is registered on.
//!
//! There is no de-duplication: a listener registered on both a node and one of its
//! ancestors receives a change at the node twice.
//!
//! ## Ordering
//!
//! Within one call, events are delivered in the order they are raised: removals for any
//! evicted occupant, then the addition, then the parent change of the attached node. Each
//! event finishes its walk to the root before the next one starts.
//!
//! ## Reentrancy
//!
//! Listeners receive a shared reference to the event and no access to the tree, so a
//! listener cannot edit the tree while an event is being delivered. Listeners that need to
//! react structurally record what they saw and act after the edit returns.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use understory_partition_tree::{EventKind, QuadTree, QuadTreeZone, TreeNodeEvent};
//!
//! let mut tree: QuadTree<u32> = QuadTree::new();
//! let root = tree.create_node();
//! let leaf = tree.create_node();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! tree.add_listener(root, move |event: &TreeNodeEvent<'_, u32>| {
//!     sink.borrow_mut().push(event.kind());
//! });
//!
//! tree.set_child(root, QuadTreeZone::NorthWest, Some(leaf));
//! assert_eq!(*seen.borrow(), [EventKind::ChildAdded, EventKind::ParentChanged]);
//! ```

use crate::types::NodeId;

/// A change observed in a tree.
///
/// Data slices borrow from the tree for the duration of the delivery.
#[derive(Debug)]
pub enum TreeNodeEvent<'a, D> {
    /// `child` was attached at slot `index` of `node`.
    ChildAdded {
        /// Node whose slot changed.
        node: NodeId,
        /// Slot index.
        index: usize,
        /// Attached node.
        child: NodeId,
    },
    /// `child` was detached from slot `index` of `node`.
    ChildRemoved {
        /// Node whose slot changed.
        node: NodeId,
        /// Slot index.
        index: usize,
        /// Detached node.
        child: NodeId,
    },
    /// The parent of `node` changed.
    ParentChanged {
        /// Node whose parent changed.
        node: NodeId,
        /// Parent before the change.
        old_parent: Option<NodeId>,
        /// Parent after the change.
        new_parent: Option<NodeId>,
    },
    /// The user data attached to `node` changed.
    DataChanged {
        /// Node whose data changed.
        node: NodeId,
        /// Values taken out, in their former order.
        removed: &'a [D],
        /// Values put in, in their new order.
        added: &'a [D],
        /// Every value attached to `node` after the change.
        current: &'a [D],
    },
}

impl<D> TreeNodeEvent<'_, D> {
    /// The node where the change was raised.
    pub fn node(&self) -> NodeId {
        match *self {
            Self::ChildAdded { node, .. }
            | Self::ChildRemoved { node, .. }
            | Self::ParentChanged { node, .. }
            | Self::DataChanged { node, .. } => node,
        }
    }

    /// Which kind of change this is.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ChildAdded { .. } => EventKind::ChildAdded,
            Self::ChildRemoved { .. } => EventKind::ChildRemoved,
            Self::ParentChanged { .. } => EventKind::ParentChanged,
            Self::DataChanged { .. } => EventKind::DataChanged,
        }
    }

    /// Net change of the user data count, for [`DataChanged`](Self::DataChanged); `0` otherwise.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "User data vectors never approach isize::MAX elements."
    )]
    pub fn data_delta(&self) -> isize {
        match self {
            Self::DataChanged { removed, added, .. } => added.len() as isize - removed.len() as isize,
            _ => 0,
        }
    }
}

/// Discriminant of a [`TreeNodeEvent`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// See [`TreeNodeEvent::ChildAdded`].
    ChildAdded,
    /// See [`TreeNodeEvent::ChildRemoved`].
    ChildRemoved,
    /// See [`TreeNodeEvent::ParentChanged`].
    ParentChanged,
    /// See [`TreeNodeEvent::DataChanged`].
    DataChanged,
}

bitflags::bitflags! {
    /// Event kinds a listener is interested in.
    ///
    /// Used by [`Tree::add_listener_for`](crate::Tree::add_listener_for). A listener is only
    /// invoked for events whose [`EventKind`] is in its mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// [`EventKind::ChildAdded`].
        const CHILD_ADDED    = 0b0000_0001;
        /// [`EventKind::ChildRemoved`].
        const CHILD_REMOVED  = 0b0000_0010;
        /// [`EventKind::ParentChanged`].
        const PARENT_CHANGED = 0b0000_0100;
        /// [`EventKind::DataChanged`].
        const DATA_CHANGED   = 0b0000_1000;
        /// Every structural change.
        const STRUCTURE = Self::CHILD_ADDED.bits() | Self::CHILD_REMOVED.bits() | Self::PARENT_CHANGED.bits();
    }
}

impl Default for EventMask {
    fn default() -> Self {
        Self::all()
    }
}

impl From<EventKind> for EventMask {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::ChildAdded => Self::CHILD_ADDED,
            EventKind::ChildRemoved => Self::CHILD_REMOVED,
            EventKind::ParentChanged => Self::PARENT_CHANGED,
            EventKind::DataChanged => Self::DATA_CHANGED,
        }
    }
}

/// Observer of changes at a node and below it.
///
/// Implemented for every `FnMut(&TreeNodeEvent<'_, D>)`.
pub trait TreeNodeListener<D> {
    /// Called once per delivered event.
    fn on_tree_node_event(&mut self, event: &TreeNodeEvent<'_, D>);
}

impl<D, F> TreeNodeListener<D> for F
where
    F: FnMut(&TreeNodeEvent<'_, D>),
{
    fn on_tree_node_event(&mut self, event: &TreeNodeEvent<'_, D>) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_covers_kinds() {
        assert!(EventMask::STRUCTURE.contains(EventKind::ChildAdded.into()));
        assert!(EventMask::STRUCTURE.contains(EventKind::ParentChanged.into()));
        assert!(!EventMask::STRUCTURE.contains(EventKind::DataChanged.into()));
        assert_eq!(EventMask::default(), EventMask::all());
    }

    #[test]
    fn data_delta_counts_net_change() {
        let removed = [1_u8];
        let added = [2_u8, 3, 4];
        let current = [2_u8, 3, 4];
        let ev = TreeNodeEvent::DataChanged {
            node: NodeId::new(0, 1),
            removed: &removed,
            added: &added,
            current: &current,
        };
        assert_eq!(ev.data_delta(), 2);
        assert_eq!(ev.kind(), EventKind::DataChanged);
        assert_eq!(ev.node(), NodeId::new(0, 1));

        let ev: TreeNodeEvent<'_, u8> = TreeNodeEvent::ParentChanged {
            node: NodeId::new(1, 1),
            old_parent: None,
            new_parent: None,
        };
        assert_eq!(ev.data_delta(), 0);
    }
}
