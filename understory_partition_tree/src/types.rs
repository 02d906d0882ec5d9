// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle types: node identifiers and listener registrations.

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// This is a small, copyable handle that stays stable while the node lives but becomes
/// invalid once the node is destroyed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On destruction ([`Tree::remove`](crate::Tree::remove), or [`Tree::clear`](crate::Tree::clear)
///   on an ancestor), the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Back-references
///
/// Parent links are stored as `NodeId`s. They are lookups, not ownership: the slot arrays of
/// the parent own the child, and a stale parent id is reported as "no parent" rather than
/// resolving to whatever reuses the slot.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Handle returned when a listener is registered on a node.
///
/// Pass it back to [`Tree::remove_listener`](crate::Tree::remove_listener) to unregister.
/// Handles are unique per tree and are never reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(pub(crate) u64);
