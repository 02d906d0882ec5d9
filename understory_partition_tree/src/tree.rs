// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: node storage, slot protocol, relocation, metrics, events.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Range;

use crate::error::{MoveError, SlotError};
use crate::event::{EventKind, EventMask, TreeNodeEvent, TreeNodeListener};
use crate::iter::{Ancestors, Children};
use crate::logging::{debug_log, trace_log};
use crate::slots::ChildSlots;
use crate::types::{ListenerId, NodeId};
use crate::zone::Zone;

impl<D, Z: Zone> Default for Tree<D, Z> {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena of fixed-arity nodes.
///
/// Every node of a tree has the arity fixed by the zone type `Z` (see the aliases
/// [`QuadTree`](crate::QuadTree), [`OctTree`](crate::OctTree), and so on). `D` is the user
/// data type attached to nodes.
///
/// Nodes are created detached, as roots. Attaching a node to a slot of another node makes
/// that slot its owner; the child keeps a non-owning [`NodeId`] back to its parent.
/// A tree may hold any number of roots at once.
pub struct Tree<D, Z: Zone> {
    nodes: Vec<Option<Node<D, Z::Slots>>>, // slots
    generations: Vec<u32>,                 // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    next_listener: u64,
}

impl<D, Z: Zone> core::fmt::Debug for Tree<D, Z> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("arity", &Self::CHILD_COUNT)
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

pub(crate) struct Node<D, S> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: S,
    pub(crate) not_null_child_count: usize,
    pub(crate) data: Vec<D>,
    listeners: Vec<Registration<D>>,
}

impl<D, S: ChildSlots> Node<D, S> {
    fn new(data: Vec<D>) -> Self {
        Self {
            parent: None,
            children: S::empty(),
            not_null_child_count: 0,
            data,
            listeners: Vec::new(),
        }
    }
}

struct Registration<D> {
    id: ListenerId,
    mask: EventMask,
    listener: Box<dyn TreeNodeListener<D>>,
}

/// A change waiting to be delivered. Materialized into a [`TreeNodeEvent`] per hop so
/// that data slices can borrow the tree.
#[derive(Clone, Debug)]
pub(crate) enum Change {
    ChildAdded {
        node: NodeId,
        index: usize,
        child: NodeId,
    },
    ChildRemoved {
        node: NodeId,
        index: usize,
        child: NodeId,
    },
    ParentChanged {
        node: NodeId,
        old_parent: Option<NodeId>,
        new_parent: Option<NodeId>,
    },
    DataChanged {
        node: NodeId,
        added: Range<usize>,
    },
}

impl Change {
    fn kind(&self) -> EventKind {
        match self {
            Self::ChildAdded { .. } => EventKind::ChildAdded,
            Self::ChildRemoved { .. } => EventKind::ChildRemoved,
            Self::ParentChanged { .. } => EventKind::ParentChanged,
            Self::DataChanged { .. } => EventKind::DataChanged,
        }
    }
}

impl<D, Z: Zone> Tree<D, Z> {
    /// Number of child slots of every node in this tree.
    pub const CHILD_COUNT: usize = <Z::Slots as ChildSlots>::COUNT;

    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            next_listener: 0,
        }
    }

    /// Create an empty tree with room for `n` nodes before reallocating.
    pub fn with_capacity(n: usize) -> Self {
        let mut tree = Self::new();
        tree.nodes.reserve(n);
        tree.generations.reserve(n);
        tree
    }

    /// Number of child slots of every node in this tree.
    pub fn child_count(&self) -> usize {
        Self::CHILD_COUNT
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Create a detached node with no user data.
    pub fn create_node(&mut self) -> NodeId {
        self.alloc(Vec::new())
    }

    /// Create a detached node carrying one user data value.
    pub fn create_node_with(&mut self, data: D) -> NodeId {
        let mut v = Vec::with_capacity(1);
        v.push(data);
        self.alloc(v)
    }

    /// Create a detached node carrying `data` in iteration order.
    pub fn create_node_from<I>(&mut self, data: I) -> NodeId
    where
        I: IntoIterator<Item = D>,
    {
        self.alloc(data.into_iter().collect())
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes.get(id.idx()).is_some_and(Option::is_some)
            && self.generations.get(id.idx()) == Some(&id.generation())
    }

    /// Iterate the live nodes that have no parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit slot indices."
                )]
                let idx = i as u32;
                Some(NodeId::new(idx, self.generations[i]))
            }
            _ => None,
        })
    }

    // --- parent link and depth ---

    /// Parent of `id`, or `None` for a root, a detached node, or a stale id.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node_opt(id)?.parent?;
        self.is_alive(parent).then_some(parent)
    }

    /// True if `id` has no parent.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.parent(id).is_none()
    }

    /// Number of edges between `id` and its root; `0` for a root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Iterate the ancestors of `id`, nearest first. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, D, Z> {
        Ancestors::new(self, id)
    }

    /// True if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    // --- slot reads ---

    /// Occupant of slot `index` of `parent`. `None` if the slot is empty or `parent` is stale.
    ///
    /// # Panics
    ///
    /// If `index >= Self::CHILD_COUNT`.
    #[track_caller]
    pub fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        assert!(
            index < Self::CHILD_COUNT,
            "child slot index {index} out of range for {} slots",
            Self::CHILD_COUNT
        );
        self.node_opt(parent)?.children.get(index)
    }

    /// Occupant of the slot named `zone`.
    pub fn child(&self, parent: NodeId, zone: Z) -> Option<NodeId> {
        self.child_at(parent, zone.ordinal())
    }

    /// Slot index holding `child` in `parent`.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.node_opt(parent)?.children.index_of(child)
    }

    /// Zone holding `child` in `parent`.
    pub fn zone_of(&self, parent: NodeId, child: NodeId) -> Option<Z> {
        self.index_of(parent, child).and_then(Z::from_index)
    }

    /// Zone `id` occupies in its parent, or `None` for a root.
    pub fn zone(&self, id: NodeId) -> Option<Z> {
        let parent = self.parent(id)?;
        self.zone_of(parent, id)
    }

    /// Iterate the occupied slots of `id` in slot order.
    pub fn children(&self, id: NodeId) -> Children<'_, Z::Slots> {
        Children::new(self.node_opt(id).map(|n| &n.children))
    }

    /// Every slot of `id`, empty ones included. Empty for a stale id.
    pub fn children_array(&self, id: NodeId) -> Vec<Option<NodeId>> {
        match self.node_opt(id) {
            Some(n) => (0..Self::CHILD_COUNT).map(|i| n.children.get(i)).collect(),
            None => Vec::new(),
        }
    }

    /// Number of occupied slots of `id`.
    pub fn not_null_child_count(&self, id: NodeId) -> usize {
        self.node_opt(id).map_or(0, |n| n.not_null_child_count)
    }

    /// True if no slot of `id` is occupied.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.not_null_child_count(id) == 0
    }

    /// True if `id` is a leaf without user data.
    pub fn is_empty(&self, id: NodeId) -> bool {
        self.is_leaf(id) && self.user_data_count(id) == 0
    }

    // --- slot writes ---

    /// Store `child` in slot `index` of `parent`, or empty the slot with `None`.
    ///
    /// Returns `false` when nothing changed: the slot already holds `child`, a node is stale,
    /// or `child` is `parent` itself or one of its ancestors.
    ///
    /// Otherwise the outgoing occupant is detached, `child` is detached from wherever it
    /// was, and then installed. Events, in order: [`ChildRemoved`](TreeNodeEvent::ChildRemoved)
    /// and [`ParentChanged`](TreeNodeEvent::ParentChanged) for the outgoing occupant,
    /// `ChildRemoved` at the previous parent of `child`, [`ChildAdded`](TreeNodeEvent::ChildAdded)
    /// here, and a single `ParentChanged` for `child` when its parent actually changed.
    ///
    /// # Panics
    ///
    /// If `index >= Self::CHILD_COUNT`.
    #[track_caller]
    pub fn set_child_at(&mut self, parent: NodeId, index: usize, child: Option<NodeId>) -> bool {
        match self.try_set_child_at(parent, index, child) {
            Ok(changed) => changed,
            Err(e @ SlotError::IndexOutOfRange { .. }) => panic!("{e}"),
            Err(_e) => {
                debug_log!(?parent, index, ?child, error = %_e, "slot edit refused");
                false
            }
        }
    }

    /// Store `child` in the slot named `zone`. See [`Tree::set_child_at`].
    #[track_caller]
    pub fn set_child(&mut self, parent: NodeId, zone: Z, child: Option<NodeId>) -> bool {
        self.set_child_at(parent, zone.ordinal(), child)
    }

    /// Fallible form of [`Tree::set_child_at`].
    ///
    /// `Ok(false)` means the slot already held `child`.
    pub fn try_set_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        child: Option<NodeId>,
    ) -> Result<bool, SlotError> {
        let count = Self::CHILD_COUNT;
        if index >= count {
            return Err(SlotError::IndexOutOfRange { index, count });
        }
        let current = self
            .node_opt(parent)
            .ok_or(SlotError::DeadNode(parent))?
            .children
            .get(index);
        if let Some(c) = child {
            if !self.is_alive(c) {
                return Err(SlotError::DeadNode(c));
            }
            if c == parent || self.is_ancestor(c, parent) {
                return Err(SlotError::WouldCreateCycle { parent, child: c });
            }
        }
        if current == child {
            return Ok(false);
        }

        if let Some(old) = current {
            self.set_child_at_without_event_firing(parent, index, None);
            self.node_mut(old).parent = None;
            self.dispatch(
                parent,
                Change::ChildRemoved {
                    node: parent,
                    index,
                    child: old,
                },
                &[],
            );
            self.dispatch(
                old,
                Change::ParentChanged {
                    node: old,
                    old_parent: Some(parent),
                    new_parent: None,
                },
                &[],
            );
        }

        if let Some(c) = child {
            let previous = self.parent(c);
            if let Some(pp) = previous
                && let Some(pi) = self.index_of(pp, c)
            {
                self.set_child_at_without_event_firing(pp, pi, None);
                self.node_mut(c).parent = None;
                self.dispatch(
                    pp,
                    Change::ChildRemoved {
                        node: pp,
                        index: pi,
                        child: c,
                    },
                    &[],
                );
            }
            self.set_child_at_without_event_firing(parent, index, Some(c));
            self.node_mut(c).parent = Some(parent);
            self.dispatch(
                parent,
                Change::ChildAdded {
                    node: parent,
                    index,
                    child: c,
                },
                &[],
            );
            if previous != Some(parent) {
                self.dispatch(
                    c,
                    Change::ParentChanged {
                        node: c,
                        old_parent: previous,
                        new_parent: Some(parent),
                    },
                    &[],
                );
            }
        }
        Ok(true)
    }

    /// Empty whichever slot of `parent` holds `child`. Returns `false` if none does.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.index_of(parent, child) {
            Some(index) => self.set_child_at(parent, index, None),
            None => false,
        }
    }

    /// Replace slot `index` of `parent` and keep `not_null_child_count` in step.
    ///
    /// Parent links of the nodes involved are left untouched and no event is fired; the
    /// caller owns both. Returns the previous occupant.
    pub(crate) fn set_child_at_without_event_firing(
        &mut self,
        parent: NodeId,
        index: usize,
        child: Option<NodeId>,
    ) -> Option<NodeId> {
        let node = self.node_mut(parent);
        let previous = node.children.replace(index, child);
        if previous.is_some() {
            node.not_null_child_count -= 1;
        }
        if child.is_some() {
            node.not_null_child_count += 1;
        }
        previous
    }

    // --- detach, prune, relocate ---

    /// Detach `id` from its parent. Returns the former parent, or `None` if `id` was a root.
    pub fn remove_from_parent(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_of(parent, id)?;
        self.set_child_at(parent, index, None);
        Some(parent)
    }

    /// Detach `id`, pruning the trail of ancestors that the removal would leave empty.
    ///
    /// Walks upward while the next ancestor would have no child and no user data once the
    /// current node is gone, then detaches the highest such ancestor from its own parent.
    /// Roots are never detached: if the walk reaches a root, the node just below it is cut.
    /// Returns the node the trail was cut from, or `None` if `id` was a root.
    pub fn remove_deeply_from_parent(&mut self, id: NodeId) -> Option<NodeId> {
        let mut node = id;
        let mut parent = self.parent(node)?;
        loop {
            let would_be_empty = {
                let p = self.node(parent);
                p.not_null_child_count == 1 && p.data.is_empty()
            };
            match self.parent(parent) {
                Some(grand) if would_be_empty => {
                    node = parent;
                    parent = grand;
                }
                _ => break,
            }
        }
        if node != id {
            debug_log!(?id, pruned = ?node, from = ?parent, "pruning empty ancestors");
        }
        self.remove_from_parent(node)
    }

    /// Relocate `id` to slot `index` of `new_parent` in one step.
    ///
    /// Returns `false` if `new_parent` is `None`, if `id` is already a child of
    /// `new_parent`, if `index` is out of range and `dynamic_slots` is `false`, if a node is
    /// stale, or if `new_parent` lies inside the subtree of `id`.
    ///
    /// With `dynamic_slots`, an out-of-range `index` is clamped to the last slot.
    ///
    /// Whatever occupied the destination slot is detached silently. Exactly three events
    /// are fired: [`ChildRemoved`](TreeNodeEvent::ChildRemoved) at the old parent (if any),
    /// [`ChildAdded`](TreeNodeEvent::ChildAdded) at `new_parent`, and one
    /// [`ParentChanged`](TreeNodeEvent::ParentChanged) for `id`.
    pub fn move_to(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
        index: usize,
        dynamic_slots: bool,
    ) -> bool {
        match self.try_move_to(id, new_parent, index, dynamic_slots) {
            Ok(()) => true,
            Err(_e) => {
                debug_log!(?id, ?new_parent, index, error = %_e, "move refused");
                false
            }
        }
    }

    /// Relocate `id` to the slot named `zone` of `new_parent`. See [`Tree::move_to`].
    pub fn move_to_zone(&mut self, id: NodeId, new_parent: Option<NodeId>, zone: Z) -> bool {
        self.move_to(id, new_parent, zone.ordinal(), false)
    }

    /// Fallible form of [`Tree::move_to`].
    pub fn try_move_to(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
        index: usize,
        dynamic_slots: bool,
    ) -> Result<(), MoveError> {
        let new_parent = new_parent.ok_or(MoveError::NoTarget)?;
        if !self.is_alive(id) {
            return Err(MoveError::DeadNode(id));
        }
        if !self.is_alive(new_parent) {
            return Err(MoveError::DeadNode(new_parent));
        }
        let old_parent = self.parent(id);
        if old_parent == Some(new_parent) {
            return Err(MoveError::SameParent {
                node: id,
                parent: new_parent,
            });
        }
        let count = Self::CHILD_COUNT;
        let index = if index < count {
            index
        } else if dynamic_slots {
            count - 1
        } else {
            return Err(MoveError::IndexOutOfRange { index, count });
        };
        if new_parent == id || self.is_ancestor(id, new_parent) {
            return Err(MoveError::WouldCreateCycle {
                node: id,
                parent: new_parent,
            });
        }

        let old_slot = old_parent.and_then(|p| {
            let i = self.index_of(p, id)?;
            self.set_child_at_without_event_firing(p, i, None);
            Some((p, i))
        });
        if let Some(evicted) = self.set_child_at_without_event_firing(new_parent, index, Some(id)) {
            debug_log!(?evicted, from = ?new_parent, index, "evicted by move");
            self.node_mut(evicted).parent = None;
        }
        self.node_mut(id).parent = Some(new_parent);
        debug_log!(?id, ?old_parent, ?new_parent, index, "moved node");

        if let Some((p, i)) = old_slot {
            self.dispatch(
                p,
                Change::ChildRemoved {
                    node: p,
                    index: i,
                    child: id,
                },
                &[],
            );
        }
        self.dispatch(
            new_parent,
            Change::ChildAdded {
                node: new_parent,
                index,
                child: id,
            },
            &[],
        );
        self.dispatch(
            id,
            Change::ParentChanged {
                node: id,
                old_parent,
                new_parent: Some(new_parent),
            },
            &[],
        );
        Ok(())
    }

    // --- metrics ---

    /// `1 + min` of the children's minimum heights, an empty slot counting as `0`.
    ///
    /// A leaf has height `1`, and so does any node with at least one empty slot.
    /// Returns `0` for a stale id.
    pub fn min_height(&self, id: NodeId) -> usize {
        let Some(n) = self.node_opt(id) else {
            return 0;
        };
        1 + (0..Self::CHILD_COUNT)
            .map(|i| n.children.get(i).map_or(0, |c| self.min_height(c)))
            .min()
            .unwrap_or(0)
    }

    /// `1 + max` of the children's maximum heights, an empty slot counting as `0`.
    ///
    /// A leaf has height `1`. Returns `0` for a stale id.
    pub fn max_height(&self, id: NodeId) -> usize {
        let Some(n) = self.node_opt(id) else {
            return 0;
        };
        1 + (0..Self::CHILD_COUNT)
            .map(|i| n.children.get(i).map_or(0, |c| self.max_height(c)))
            .max()
            .unwrap_or(0)
    }

    /// Height of every leaf below `id`, in slot order, counting `id` itself as height `1`.
    pub fn heights(&self, id: NodeId) -> Vec<usize> {
        let mut out = Vec::new();
        if self.is_alive(id) {
            self.collect_heights(id, 1, &mut out);
        }
        out
    }

    fn collect_heights(&self, id: NodeId, current: usize, out: &mut Vec<usize>) {
        if self.is_leaf(id) {
            out.push(current);
            return;
        }
        for child in self.children(id) {
            self.collect_heights(child, current + 1, out);
        }
    }

    /// Number of nodes in the subtree rooted at `id`, `id` included.
    pub fn deep_node_count(&self, id: NodeId) -> usize {
        if !self.is_alive(id) {
            return 0;
        }
        1 + self
            .children(id)
            .map(|c| self.deep_node_count(c))
            .sum::<usize>()
    }

    /// Number of user data values in the subtree rooted at `id`.
    pub fn deep_user_data_count(&self, id: NodeId) -> usize {
        self.user_data_count(id)
            + self
                .children(id)
                .map(|c| self.deep_user_data_count(c))
                .sum::<usize>()
    }

    // --- teardown ---

    /// Detach and destroy every descendant of `id`, then drop its user data.
    ///
    /// Slots are cleared in slot order. Each child is detached with the usual events, its
    /// own subtree is cleared, and then it is destroyed. `id` itself stays alive and keeps
    /// its parent and listeners.
    pub fn clear(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        for index in 0..Self::CHILD_COUNT {
            if let Some(child) = self.node(id).children.get(index) {
                self.set_child_at(id, index, None);
                self.clear(child);
                self.release(child);
            }
        }
        let _ = self.remove_all_user_data(id);
    }

    /// Detach `id` from its parent and destroy it along with its subtree.
    ///
    /// Listeners registered on destroyed nodes are dropped.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.remove_from_parent(id);
        self.clear(id);
        self.release(id);
        debug_log!(?id, "removed subtree");
    }

    // --- listeners ---

    /// Register `listener` for every event raised at `id` or below it.
    ///
    /// Returns `None` if `id` is stale.
    pub fn add_listener<L>(&mut self, id: NodeId, listener: L) -> Option<ListenerId>
    where
        L: TreeNodeListener<D> + 'static,
    {
        self.add_listener_for(id, EventMask::all(), listener)
    }

    /// Register `listener` for the event kinds in `mask` raised at `id` or below it.
    pub fn add_listener_for<L>(
        &mut self,
        id: NodeId,
        mask: EventMask,
        listener: L,
    ) -> Option<ListenerId>
    where
        L: TreeNodeListener<D> + 'static,
    {
        let handle = ListenerId(self.next_listener);
        let node = self.node_opt_mut(id)?;
        node.listeners.push(Registration {
            id: handle,
            mask,
            listener: Box::new(listener),
        });
        self.next_listener += 1;
        Some(handle)
    }

    /// Unregister a listener from `id`. Returns `false` if it was not registered there.
    pub fn remove_listener(&mut self, id: NodeId, listener: ListenerId) -> bool {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        let before = node.listeners.len();
        node.listeners.retain(|r| r.id != listener);
        node.listeners.len() != before
    }

    /// Number of listeners registered directly on `id`.
    pub fn listener_count(&self, id: NodeId) -> usize {
        self.node_opt(id).map_or(0, |n| n.listeners.len())
    }

    /// Deliver `change` to the listeners of `origin`, then of each ancestor up to the root.
    pub(crate) fn dispatch(&mut self, origin: NodeId, change: Change, removed: &[D]) {
        let mask = EventMask::from(change.kind());
        let mut at = Some(origin);
        let mut _hops = 0_usize;
        while let Some(id) = at {
            let Some(node) = self.node_opt_mut(id) else {
                break;
            };
            if !node.listeners.is_empty() {
                // Listeners cannot reach the tree, so none are added while these are out.
                let mut listeners = core::mem::take(&mut node.listeners);
                {
                    let event = self.materialize(&change, removed);
                    for reg in listeners.iter_mut().filter(|r| r.mask.intersects(mask)) {
                        reg.listener.on_tree_node_event(&event);
                    }
                }
                self.node_mut(id).listeners = listeners;
            }
            at = self.parent(id);
            _hops += 1;
        }
        trace_log!(?origin, kind = ?change.kind(), hops = _hops, "delivered tree event");
    }

    fn materialize<'a>(&'a self, change: &Change, removed: &'a [D]) -> TreeNodeEvent<'a, D> {
        match *change {
            Change::ChildAdded { node, index, child } => {
                TreeNodeEvent::ChildAdded { node, index, child }
            }
            Change::ChildRemoved { node, index, child } => {
                TreeNodeEvent::ChildRemoved { node, index, child }
            }
            Change::ParentChanged {
                node,
                old_parent,
                new_parent,
            } => TreeNodeEvent::ParentChanged {
                node,
                old_parent,
                new_parent,
            },
            Change::DataChanged { node, ref added } => {
                let current = self.user_data(node);
                TreeNodeEvent::DataChanged {
                    node,
                    removed,
                    added: current.get(added.clone()).unwrap_or(&[]),
                    current,
                }
            }
        }
    }

    // --- internals ---

    fn alloc(&mut self, data: Vec<D>) -> NodeId {
        let node = Node::new(data);
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit slot indices."
        )]
        let id = NodeId::new(idx as u32, generation);
        trace_log!(?id, "created node");
        id
    }

    /// Free the slot of a node that is already detached and childless.
    fn release(&mut self, id: NodeId) {
        debug_assert!(self.is_leaf(id), "released node still has children");
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        trace_log!(?id, "destroyed node");
    }

    pub(crate) fn node_opt(&self, id: NodeId) -> Option<&Node<D, Z::Slots>> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_ref()
    }

    pub(crate) fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node<D, Z::Slots>> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_mut()
    }

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: NodeId) -> &Node<D, Z::Slots> {
        self.node_opt(id).expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<D, Z::Slots> {
        self.node_opt_mut(id).expect("dangling NodeId")
    }
}
