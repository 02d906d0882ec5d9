// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child slot storage: the per-arity contract every node variant implements.
//!
//! ## Overview
//!
//! A node owns a fixed number of child slots. The count is part of the type, never a
//! runtime setting, so a quadtree node is exactly four `Option<NodeId>` cells with no
//! heap allocation.
//!
//! - `[Option<NodeId>; N]` covers every plain variant (binary, ternary, quad, penta, oct).
//! - [`Icosep<S>`] decorates any other slot storage with one extra slot appended after
//!   the wrapped ones.
//!
//! Slot storage is dumb on purpose: it does not know about parents, counters, or events.
//! [`Tree`](crate::Tree) layers the attach/detach protocol on top.

use core::fmt::Debug;

use crate::types::NodeId;

/// Fixed-size storage for the children of one node.
///
/// Index-addressed methods panic when `index >= Self::COUNT`; an out-of-range slot is a
/// programming error, not a recoverable condition.
pub trait ChildSlots: Clone + Debug {
    /// Number of slots.
    const COUNT: usize;

    /// Storage with every slot empty.
    fn empty() -> Self;

    /// Returns the occupant of slot `index`.
    ///
    /// # Panics
    ///
    /// If `index >= Self::COUNT`.
    fn get(&self, index: usize) -> Option<NodeId>;

    /// Stores `child` in slot `index` and returns the previous occupant.
    ///
    /// # Panics
    ///
    /// If `index >= Self::COUNT`.
    fn replace(&mut self, index: usize, child: Option<NodeId>) -> Option<NodeId>;

    /// Returns the slot holding `child`, if any.
    fn index_of(&self, child: NodeId) -> Option<usize> {
        (0..Self::COUNT).find(|&i| self.get(i) == Some(child))
    }

    /// True if no slot is occupied.
    fn is_leaf(&self) -> bool {
        (0..Self::COUNT).all(|i| self.get(i).is_none())
    }
}

#[track_caller]
fn check_index(index: usize, count: usize) {
    assert!(
        index < count,
        "child slot index {index} out of range for {count} slots"
    );
}

impl<const N: usize> ChildSlots for [Option<NodeId>; N] {
    const COUNT: usize = N;

    fn empty() -> Self {
        [None; N]
    }

    #[track_caller]
    fn get(&self, index: usize) -> Option<NodeId> {
        check_index(index, N);
        self[index]
    }

    #[track_caller]
    fn replace(&mut self, index: usize, child: Option<NodeId>) -> Option<NodeId> {
        check_index(index, N);
        core::mem::replace(&mut self[index], child)
    }

    fn index_of(&self, child: NodeId) -> Option<usize> {
        self.iter().position(|c| *c == Some(child))
    }

    fn is_leaf(&self) -> bool {
        self.iter().all(Option::is_none)
    }
}

/// Slot storage with one extra "icosep" slot appended after the wrapped slots.
///
/// The icosep slot holds what straddles the partition implied by the wrapped slots (for
/// example an object crossing the median lines of a quadrant split). Its index is
/// `S::COUNT`; every index-addressed method checks for it before delegating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icosep<S> {
    base: S,
    icosep: Option<NodeId>,
}

impl<S: ChildSlots> Icosep<S> {
    /// Index of the icosep slot.
    pub const ICOSEP_INDEX: usize = S::COUNT;

    /// The wrapped slots.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Occupant of the icosep slot.
    pub fn icosep(&self) -> Option<NodeId> {
        self.icosep
    }
}

impl<S: ChildSlots> ChildSlots for Icosep<S> {
    const COUNT: usize = S::COUNT + 1;

    fn empty() -> Self {
        Self {
            base: S::empty(),
            icosep: None,
        }
    }

    #[track_caller]
    fn get(&self, index: usize) -> Option<NodeId> {
        if index == S::COUNT {
            self.icosep
        } else {
            self.base.get(index)
        }
    }

    #[track_caller]
    fn replace(&mut self, index: usize, child: Option<NodeId>) -> Option<NodeId> {
        if index == S::COUNT {
            core::mem::replace(&mut self.icosep, child)
        } else {
            self.base.replace(index, child)
        }
    }

    fn index_of(&self, child: NodeId) -> Option<usize> {
        if self.icosep == Some(child) {
            Some(S::COUNT)
        } else {
            self.base.index_of(child)
        }
    }

    fn is_leaf(&self) -> bool {
        self.base.is_leaf() && self.icosep.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> NodeId {
        NodeId::new(i, 1)
    }

    #[test]
    fn array_slots_replace_and_find() {
        let mut s = <[Option<NodeId>; 4]>::empty();
        assert!(s.is_leaf());
        assert_eq!(s.replace(2, Some(id(9))), None);
        assert_eq!(s.get(2), Some(id(9)));
        assert_eq!(s.index_of(id(9)), Some(2));
        assert_eq!(s.replace(2, None), Some(id(9)));
        assert!(s.is_leaf());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn array_slots_reject_out_of_range() {
        let s = <[Option<NodeId>; 3]>::empty();
        let _ = s.get(3);
    }

    #[test]
    fn icosep_slot_is_appended() {
        type Slots = Icosep<[Option<NodeId>; 4]>;
        assert_eq!(Slots::COUNT, 5);
        assert_eq!(Slots::ICOSEP_INDEX, 4);

        let mut s = Slots::empty();
        s.replace(4, Some(id(1)));
        assert!(!s.is_leaf(), "icosep occupant makes the node a non-leaf");
        assert!(s.base().is_leaf());
        assert_eq!(s.icosep(), Some(id(1)));
        assert_eq!(s.index_of(id(1)), Some(4));

        s.replace(0, Some(id(2)));
        assert_eq!(s.index_of(id(2)), Some(0));
        assert_eq!(s.get(0), Some(id(2)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn icosep_slots_reject_past_icosep() {
        let mut s = Icosep::<[Option<NodeId>; 2]>::empty();
        s.replace(3, None);
    }
}
