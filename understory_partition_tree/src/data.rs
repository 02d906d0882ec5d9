// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User data attached to nodes.
//!
//! Each node carries an ordered list of `D` values; duplicates are allowed. Every mutation
//! that changes the list raises one [`TreeNodeEvent::DataChanged`](crate::TreeNodeEvent::DataChanged)
//! carrying the removed values, the added values, and the list as it now stands.

use alloc::vec::Vec;

use crate::tree::{Change, Tree};
use crate::types::NodeId;
use crate::zone::Zone;

impl<D, Z: Zone> Tree<D, Z> {
    /// User data of `id`, in order. Empty for a stale id.
    pub fn user_data(&self, id: NodeId) -> &[D] {
        match self.node_opt(id) {
            Some(n) => &n.data,
            None => &[],
        }
    }

    /// First user data value of `id`.
    pub fn first_user_data(&self, id: NodeId) -> Option<&D> {
        self.user_data(id).first()
    }

    /// Number of user data values on `id`.
    pub fn user_data_count(&self, id: NodeId) -> usize {
        self.user_data(id).len()
    }

    /// Append `value` to the user data of `id`. Returns `false` for a stale id.
    pub fn add_user_data(&mut self, id: NodeId, value: D) -> bool {
        let len = self.user_data_count(id);
        self.insert_user_data(id, len, value)
    }

    /// Append every value of `values`. Returns `false` if nothing was added.
    pub fn extend_user_data<I>(&mut self, id: NodeId, values: I) -> bool
    where
        I: IntoIterator<Item = D>,
    {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        let start = node.data.len();
        node.data.extend(values);
        let end = node.data.len();
        if start == end {
            return false;
        }
        self.dispatch(
            id,
            Change::DataChanged {
                node: id,
                added: start..end,
            },
            &[],
        );
        true
    }

    /// Insert `value` at `index`, shifting later values.
    ///
    /// Returns `false` for a stale id or when `index` is past the end.
    pub fn insert_user_data(&mut self, id: NodeId, index: usize, value: D) -> bool {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        if index > node.data.len() {
            return false;
        }
        node.data.insert(index, value);
        self.dispatch(
            id,
            Change::DataChanged {
                node: id,
                added: index..index + 1,
            },
            &[],
        );
        true
    }

    /// Replace the whole user data list of `id`.
    ///
    /// Raises a single event whose removed part is the previous list. Returns `false` for a
    /// stale id, or if both the previous and the new list are empty.
    pub fn set_user_data<I>(&mut self, id: NodeId, values: I) -> bool
    where
        I: IntoIterator<Item = D>,
    {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        let removed = core::mem::replace(&mut node.data, values.into_iter().collect());
        let added = 0..node.data.len();
        if removed.is_empty() && added.is_empty() {
            return false;
        }
        self.dispatch(id, Change::DataChanged { node: id, added }, &removed);
        true
    }

    /// Replace the value at `index` and return the previous one.
    ///
    /// Returns `None`, and drops `value`, for a stale id or an out-of-range index.
    pub fn set_user_data_at(&mut self, id: NodeId, index: usize, value: D) -> Option<D> {
        let slot = self.node_opt_mut(id)?.data.get_mut(index)?;
        let old = core::mem::replace(slot, value);
        self.dispatch(
            id,
            Change::DataChanged {
                node: id,
                added: index..index + 1,
            },
            core::slice::from_ref(&old),
        );
        Some(old)
    }

    /// Remove and return the value at `index`.
    pub fn remove_user_data_at(&mut self, id: NodeId, index: usize) -> Option<D> {
        let node = self.node_opt_mut(id)?;
        if index >= node.data.len() {
            return None;
        }
        let old = node.data.remove(index);
        self.dispatch(
            id,
            Change::DataChanged {
                node: id,
                added: 0..0,
            },
            core::slice::from_ref(&old),
        );
        Some(old)
    }

    /// Remove every value equal to `value`. Returns `false` if there was none.
    pub fn remove_user_data(&mut self, id: NodeId, value: &D) -> bool
    where
        D: PartialEq,
    {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        let (removed, kept): (Vec<D>, Vec<D>) =
            core::mem::take(&mut node.data).into_iter().partition(|v| v == value);
        node.data = kept;
        if removed.is_empty() {
            return false;
        }
        self.dispatch(
            id,
            Change::DataChanged {
                node: id,
                added: 0..0,
            },
            &removed,
        );
        true
    }

    /// Remove and return every user data value of `id`.
    pub fn remove_all_user_data(&mut self, id: NodeId) -> Vec<D> {
        let Some(node) = self.node_opt_mut(id) else {
            return Vec::new();
        };
        let removed = core::mem::take(&mut node.data);
        if !removed.is_empty() {
            self.dispatch(
                id,
                Change::DataChanged {
                    node: id,
                    added: 0..0,
                },
                &removed,
            );
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryTree, QuadTree, TreeNodeEvent};
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Snapshot = (Vec<char>, Vec<char>, Vec<char>);

    fn watch(tree: &mut QuadTree<char>, at: crate::NodeId) -> Rc<RefCell<Vec<Snapshot>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        tree.add_listener(at, move |e: &TreeNodeEvent<'_, char>| {
            if let TreeNodeEvent::DataChanged {
                removed,
                added,
                current,
                ..
            } = e
            {
                sink.borrow_mut()
                    .push((removed.to_vec(), added.to_vec(), current.to_vec()));
            }
        });
        log
    }

    #[test]
    fn add_insert_and_read_back() {
        let mut tree: QuadTree<char> = QuadTree::new();
        let n = tree.create_node_with('a');
        let log = watch(&mut tree, n);

        assert!(tree.add_user_data(n, 'c'));
        assert!(tree.insert_user_data(n, 1, 'b'));
        assert!(!tree.insert_user_data(n, 9, 'z'));
        assert_eq!(tree.user_data(n), ['a', 'b', 'c']);
        assert_eq!(tree.first_user_data(n), Some(&'a'));
        assert_eq!(tree.user_data_count(n), 3);
        assert!(!tree.is_empty(n));
        assert_eq!(
            *log.borrow(),
            vec![
                (vec![], vec!['c'], vec!['a', 'c']),
                (vec![], vec!['b'], vec!['a', 'b', 'c']),
            ]
        );
    }

    #[test]
    fn replace_and_remove_report_removed_values() {
        let mut tree: QuadTree<char> = QuadTree::new();
        let n = tree.create_node_from(['x', 'y', 'x']);
        let log = watch(&mut tree, n);

        assert_eq!(tree.set_user_data_at(n, 1, 'z'), Some('y'));
        assert!(tree.remove_user_data(n, &'x'));
        assert!(!tree.remove_user_data(n, &'x'));
        assert_eq!(tree.user_data(n), ['z']);
        assert_eq!(tree.remove_user_data_at(n, 0), Some('z'));
        assert_eq!(tree.remove_user_data_at(n, 0), None);
        assert!(tree.is_empty(n));
        assert_eq!(
            *log.borrow(),
            vec![
                (vec!['y'], vec!['z'], vec!['x', 'z', 'x']),
                (vec!['x', 'x'], vec![], vec!['z']),
                (vec!['z'], vec![], vec![]),
            ]
        );
    }

    #[test]
    fn bulk_replace_and_drain() {
        let mut tree: QuadTree<char> = QuadTree::new();
        let root = tree.create_node();
        let n = tree.create_node_with('a');
        tree.set_child_at(root, 0, Some(n));
        let log = watch(&mut tree, root);

        assert!(tree.set_user_data(n, ['p', 'q']));
        assert!(!tree.extend_user_data(n, []));
        assert!(tree.extend_user_data(n, ['r']));
        assert_eq!(tree.remove_all_user_data(n), vec!['p', 'q', 'r']);
        assert!(tree.remove_all_user_data(n).is_empty());
        assert!(!tree.set_user_data(n, []));
        assert_eq!(
            *log.borrow(),
            vec![
                (vec!['a'], vec!['p', 'q'], vec!['p', 'q']),
                (vec![], vec!['r'], vec!['p', 'q', 'r']),
                (vec!['p', 'q', 'r'], vec![], vec![]),
            ]
        );
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut tree: BinaryTree<u8> = BinaryTree::new();
        let n = tree.create_node_with(1);
        tree.remove(n);
        assert!(!tree.add_user_data(n, 2));
        assert_eq!(tree.user_data(n), &[] as &[u8]);
        assert_eq!(tree.set_user_data_at(n, 0, 3), None);
        assert_eq!(tree.user_data_count(n), 0);
    }
}
