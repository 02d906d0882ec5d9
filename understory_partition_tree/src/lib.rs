// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_partition_tree --heading-base-level=0

//! Understory Partition Tree: fixed-arity tree nodes for spatial partitioning.
//!
//! This crate is the structural skeleton beneath quadtrees, octrees and their relatives.
//! It does not know about geometry; it keeps parent and child links consistent while a
//! partitioning algorithm built on top decides where things go.
//!
//! - Nodes have a fixed number of child slots, named by a zone enumeration: binary (2),
//!   ternary (3), quad (4), penta (5), oct (8).
//! - Icosep variants append one extra slot for objects straddling the split.
//! - Children own their slot; parents are non-owning back-links.
//! - Every edit raises change events that bubble from the edited node up to the root.
//!
//! ## Storage model
//!
//! A [`Tree`] is an arena. Nodes are addressed by generational [`NodeId`]s, so a parent link
//! never keeps a node alive and a stale id never aliases a newer node. A `Tree` may hold
//! several detached roots at once; creating a node does not attach it anywhere.
//!
//! The zone type fixes the arity for the whole tree at compile time:
//! [`QuadTree<D>`](QuadTree) is `Tree<D, QuadTreeZone>`, whose nodes are four
//! `Option<NodeId>` slots plus their user data. See [`variants`] for the full table.
//!
//! ## API overview
//!
//! - Slots: [`Tree::set_child`], [`Tree::set_child_at`], [`Tree::child`], [`Tree::index_of`],
//!   [`Tree::children`].
//! - Links: [`Tree::parent`], [`Tree::depth`], [`Tree::remove_from_parent`],
//!   [`Tree::remove_deeply_from_parent`], [`Tree::move_to`].
//! - Metrics: [`Tree::min_height`], [`Tree::max_height`], [`Tree::is_leaf`], [`Tree::is_empty`],
//!   [`Tree::deep_node_count`].
//! - Teardown: [`Tree::clear`] and [`Tree::remove`] destroy descendants.
//! - User data: [`Tree::add_user_data`], [`Tree::user_data`] and friends.
//! - Events: [`Tree::add_listener`] with a [`TreeNodeListener`] or a closure; see [`event`].
//!
//! Structural edits report refusal with `false`. The `try_` forms
//! ([`Tree::try_set_child_at`], [`Tree::try_move_to`]) say why. Slot indices past the arity
//! are programming errors and panic.
//!
//! ### Minimal usage
//!
//! ```
//! use understory_partition_tree::{QuadTree, QuadTreeZone};
//!
//! let mut tree: QuadTree<&str> = QuadTree::new();
//! let root = tree.create_node();
//! let q1 = tree.create_node_with("north-west");
//!
//! tree.set_child(root, QuadTreeZone::NorthWest, Some(q1));
//! assert_eq!(tree.not_null_child_count(root), 1);
//! assert_eq!(tree.max_height(root), 2);
//! assert_eq!(tree.depth(q1), 1);
//!
//! tree.remove_from_parent(q1);
//! assert_eq!(tree.child(root, QuadTreeZone::NorthWest), None);
//! assert!(tree.is_root(q1));
//! assert!(tree.is_leaf(root));
//! ```
//!
//! ### Relocating a node
//!
//! ```
//! use understory_partition_tree::{IcosepQuadTree, IcosepQuadTreeZone, QuadTreeZone};
//!
//! let mut tree: IcosepQuadTree<u32> = IcosepQuadTree::new();
//! let root = tree.create_node();
//! let cell = tree.create_node();
//! let item = tree.create_node_with(7);
//! tree.set_base_child(root, QuadTreeZone::SouthEast, Some(cell));
//! tree.set_base_child(cell, QuadTreeZone::NorthWest, Some(item));
//!
//! // The item grew across the median lines: lift it into the root's icosep slot.
//! assert!(tree.move_to_zone(item, Some(root), IcosepQuadTreeZone::Icosep));
//! assert_eq!(tree.icosep_child(root), Some(item));
//! assert_eq!(tree.index_of(root, item), Some(4));
//!
//! // The cell is now empty; prune it.
//! assert_eq!(tree.remove_deeply_from_parent(cell), Some(root));
//! assert_eq!(tree.not_null_child_count(root), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std` support for dependencies.
//! - `tracing`: structural logging through [`tracing`](https://docs.rs/tracing).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod error;
pub mod event;
mod iter;
mod logging;
pub mod slots;
mod tree;
mod types;
pub mod variants;
pub mod zone;

pub use error::{MoveError, SlotError};
pub use event::{EventKind, EventMask, TreeNodeEvent, TreeNodeListener};
pub use iter::{Ancestors, Children, PostfixNodes, PrefixNodes, PrefixUserData};
pub use slots::{ChildSlots, Icosep};
pub use tree::Tree;
pub use types::{ListenerId, NodeId};
pub use variants::{
    BinaryTree, BinaryTreeZone, IcosepBinaryTree, IcosepBinaryTreeZone, IcosepOctTree,
    IcosepOctTreeZone, IcosepQuadTree, IcosepQuadTreeZone, OctTree, OctTreeZone, PentaTree,
    PentaTreeZone, QuadTree, QuadTreeZone, TernaryTree, TernaryTreeZone,
};
pub use zone::{IcosepZone, Zone};
