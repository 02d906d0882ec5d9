// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tree::Tree;
use crate::types::NodeId;
use crate::zone::Zone;

/// Tree whose nodes split a region into four quadrants.
pub type QuadTree<D> = Tree<D, QuadTreeZone>;

/// Quadrants of a [`QuadTree`] node.
///
/// North is the side of decreasing `y` and west the side of decreasing `x`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum QuadTreeZone {
    /// Slot `0`.
    NorthWest,
    /// Slot `1`.
    NorthEast,
    /// Slot `2`.
    SouthWest,
    /// Slot `3`.
    SouthEast,
}

impl QuadTreeZone {
    /// Quadrant on the given sides of the split point.
    pub fn from_sides(east: bool, south: bool) -> Self {
        match (south, east) {
            (false, false) => Self::NorthWest,
            (false, true) => Self::NorthEast,
            (true, false) => Self::SouthWest,
            (true, true) => Self::SouthEast,
        }
    }

    /// True for the two eastern quadrants.
    pub fn is_east(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast)
    }

    /// True for the two southern quadrants.
    pub fn is_south(self) -> bool {
        matches!(self, Self::SouthWest | Self::SouthEast)
    }
}

impl Zone for QuadTreeZone {
    type Slots = [Option<NodeId>; 4];

    const ALL: &'static [Self] = &[
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }
}
