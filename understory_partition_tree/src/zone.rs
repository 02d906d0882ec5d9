// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone enumerations: named child slots.
//!
//! Every node variant names its slots with a small enum. The enum fixes the arity of a
//! [`Tree`](crate::Tree) through [`Zone::Slots`], and [`Zone::ordinal`] is the slot index.
//!
//! Icosep variants append exactly one `Icosep` value after the base zones, so its ordinal
//! is the base arity. [`IcosepZone`] exposes that value and the mapping to and from the
//! base enumeration.

use core::fmt::Debug;

use crate::slots::ChildSlots;

/// A named child slot of a fixed-arity node.
///
/// Implementors guarantee `ALL.len() == <Self::Slots as ChildSlots>::COUNT` and
/// `ALL[z.ordinal()] == z` for every zone `z`.
pub trait Zone: Copy + Eq + Debug + 'static {
    /// Slot storage sized for this enumeration.
    type Slots: ChildSlots;

    /// Every zone, in ordinal order.
    const ALL: &'static [Self];

    /// Slot index of this zone.
    fn ordinal(self) -> usize;

    /// Zone for a slot index, or `None` when out of range.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A zone enumeration extended with one icosep value.
pub trait IcosepZone: Zone {
    /// The enumeration being extended.
    type Base: Zone;

    /// The appended zone; its ordinal is the base arity.
    const ICOSEP: Self;

    /// The value with the same ordinal as `base`.
    fn from_base(base: Self::Base) -> Self;

    /// The base zone this value corresponds to, or `None` for [`Self::ICOSEP`].
    fn to_base(self) -> Option<Self::Base>;

    /// True for [`Self::ICOSEP`].
    fn is_icosep(self) -> bool {
        self == Self::ICOSEP
    }
}
