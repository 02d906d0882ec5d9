// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-arity node families.
//!
//! | Tree                 | Zone                     | Slots |
//! |----------------------|--------------------------|-------|
//! | [`BinaryTree`]       | [`BinaryTreeZone`]       | 2     |
//! | [`TernaryTree`]      | [`TernaryTreeZone`]      | 3     |
//! | [`QuadTree`]         | [`QuadTreeZone`]         | 4     |
//! | [`PentaTree`]        | [`PentaTreeZone`]        | 5     |
//! | [`OctTree`]          | [`OctTreeZone`]          | 8     |
//! | [`IcosepBinaryTree`] | [`IcosepBinaryTreeZone`] | 3     |
//! | [`IcosepQuadTree`]   | [`IcosepQuadTreeZone`]   | 5     |
//! | [`IcosepOctTree`]    | [`IcosepOctTreeZone`]    | 9     |

mod binary;
mod icosep;
mod oct;
mod penta;
mod quad;
mod ternary;

pub use binary::{BinaryTree, BinaryTreeZone};
pub use icosep::{
    IcosepBinaryTree, IcosepBinaryTreeZone, IcosepOctTree, IcosepOctTreeZone, IcosepQuadTree,
    IcosepQuadTreeZone,
};
pub use oct::{OctTree, OctTreeZone};
pub use penta::{PentaTree, PentaTreeZone};
pub use quad::{QuadTree, QuadTreeZone};
pub use ternary::{TernaryTree, TernaryTreeZone};
