// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Tree whose nodes split a volume into eight octants.
pub type OctTree<D> = Tree<D, OctTreeZone>;

/// Octants of an [`OctTree`] node.
///
/// Ordered north before south, then west before east, then front before back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum OctTreeZone {
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
}

impl OctTreeZone {
    /// Octant on the given sides of the split point.
    pub fn from_sides(east: bool, south: bool, back: bool) -> Self {
        let index = usize::from(south) * 4 + usize::from(east) * 2 + usize::from(back);
        Self::ALL[index]
    }
}

impl Zone for OctTreeZone {
    type Slots = [Option<NodeId>; 8];

    const ALL: &'static [Self] = &[
        Self::NorthWestFront,
        Self::NorthWestBack,
        Self::NorthEastFront,
        Self::NorthEastBack,
        Self::SouthWestFront,
        Self::SouthWestBack,
        Self::SouthEastFront,
        Self::SouthEastBack,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }
}
