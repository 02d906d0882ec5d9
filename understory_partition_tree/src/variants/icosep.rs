// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icosep families: a base arity plus one slot for what straddles the split.
//!
//! The icosep slot comes after the base slots, so [`Tree::index_of`] reports the base arity
//! for an icosep child. It counts like any other slot for leaf tests, heights, and
//! [`Tree::not_null_child_count`].

use crate::slots::{ChildSlots, Icosep};
use crate::tree::Tree;
use crate::types::NodeId;
use crate::variants::{BinaryTreeZone, OctTreeZone, QuadTreeZone};
use crate::zone::{IcosepZone, Zone};

impl<D, Z: IcosepZone> Tree<D, Z> {
    /// Slot index of the icosep child.
    pub const ICOSEP_INDEX: usize = <<Z::Base as Zone>::Slots as ChildSlots>::COUNT;

    /// Icosep child of `id`.
    pub fn icosep_child(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, Z::ICOSEP)
    }

    /// Store `child` in the icosep slot of `id`. See [`Tree::set_child_at`].
    pub fn set_icosep_child(&mut self, id: NodeId, child: Option<NodeId>) -> bool {
        self.set_child(id, Z::ICOSEP, child)
    }

    /// Child of `id` in a base zone.
    pub fn base_child(&self, id: NodeId, zone: Z::Base) -> Option<NodeId> {
        self.child(id, Z::from_base(zone))
    }

    /// Store `child` in a base zone of `id`.
    pub fn set_base_child(&mut self, id: NodeId, zone: Z::Base, child: Option<NodeId>) -> bool {
        self.set_child(id, Z::from_base(zone), child)
    }
}

/// Binary tree with an icosep slot.
pub type IcosepBinaryTree<D> = Tree<D, IcosepBinaryTreeZone>;

/// Child slots of an [`IcosepBinaryTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum IcosepBinaryTreeZone {
    /// Slot `0`.
    Left,
    /// Slot `1`.
    Right,
    /// Slot `2`: straddles the split.
    Icosep,
}

impl Zone for IcosepBinaryTreeZone {
    type Slots = Icosep<[Option<NodeId>; 2]>;

    const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Icosep];

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl IcosepZone for IcosepBinaryTreeZone {
    type Base = BinaryTreeZone;

    const ICOSEP: Self = Self::Icosep;

    fn from_base(base: BinaryTreeZone) -> Self {
        Self::from(base)
    }

    fn to_base(self) -> Option<BinaryTreeZone> {
        match self {
            Self::Left => Some(BinaryTreeZone::Left),
            Self::Right => Some(BinaryTreeZone::Right),
            Self::Icosep => None,
        }
    }
}

impl From<BinaryTreeZone> for IcosepBinaryTreeZone {
    fn from(zone: BinaryTreeZone) -> Self {
        match zone {
            BinaryTreeZone::Left => Self::Left,
            BinaryTreeZone::Right => Self::Right,
        }
    }
}

/// Quadtree with an icosep slot.
pub type IcosepQuadTree<D> = Tree<D, IcosepQuadTreeZone>;

/// Child slots of an [`IcosepQuadTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum IcosepQuadTreeZone {
    /// Slot `0`.
    NorthWest,
    /// Slot `1`.
    NorthEast,
    /// Slot `2`.
    SouthWest,
    /// Slot `3`.
    SouthEast,
    /// Slot `4`: straddles a median line.
    Icosep,
}

impl Zone for IcosepQuadTreeZone {
    type Slots = Icosep<[Option<NodeId>; 4]>;

    const ALL: &'static [Self] = &[
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
        Self::Icosep,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl IcosepZone for IcosepQuadTreeZone {
    type Base = QuadTreeZone;

    const ICOSEP: Self = Self::Icosep;

    fn from_base(base: QuadTreeZone) -> Self {
        Self::from(base)
    }

    fn to_base(self) -> Option<QuadTreeZone> {
        QuadTreeZone::from_index(self.ordinal())
    }
}

impl From<QuadTreeZone> for IcosepQuadTreeZone {
    fn from(zone: QuadTreeZone) -> Self {
        Self::ALL[zone.ordinal()]
    }
}

/// Octree with an icosep slot.
pub type IcosepOctTree<D> = Tree<D, IcosepOctTreeZone>;

/// Child slots of an [`IcosepOctTree`] node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum IcosepOctTreeZone {
    /// Slot `0`.
    NorthWestFront,
    /// Slot `1`.
    NorthWestBack,
    /// Slot `2`.
    NorthEastFront,
    /// Slot `3`.
    NorthEastBack,
    /// Slot `4`.
    SouthWestFront,
    /// Slot `5`.
    SouthWestBack,
    /// Slot `6`.
    SouthEastFront,
    /// Slot `7`.
    SouthEastBack,
    /// Slot `8`: straddles a median plane.
    Icosep,
}

impl Zone for IcosepOctTreeZone {
    type Slots = Icosep<[Option<NodeId>; 8]>;

    const ALL: &'static [Self] = &[
        Self::NorthWestFront,
        Self::NorthWestBack,
        Self::NorthEastFront,
        Self::NorthEastBack,
        Self::SouthWestFront,
        Self::SouthWestBack,
        Self::SouthEastFront,
        Self::SouthEastBack,
        Self::Icosep,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl IcosepZone for IcosepOctTreeZone {
    type Base = OctTreeZone;

    const ICOSEP: Self = Self::Icosep;

    fn from_base(base: OctTreeZone) -> Self {
        Self::from(base)
    }

    fn to_base(self) -> Option<OctTreeZone> {
        OctTreeZone::from_index(self.ordinal())
    }
}

impl From<OctTreeZone> for IcosepOctTreeZone {
    fn from(zone: OctTreeZone) -> Self {
        Self::ALL[zone.ordinal()]
    }
}
