// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree over Kurbo rectangles.
//!
//! Items descend into the quadrant that fully contains them. Items that straddle a median
//! line stop at that level and live in the node's icosep child. Removing the last item of
//! a cell prunes the empty trail back up the tree.
//!
//! Run:
//! - `cargo run -p understory_partition_demos --example region_quadtree`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_partition_tree::{
    EventMask, IcosepQuadTree, NodeId, QuadTreeZone, TreeNodeEvent, Zone,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Item {
    id: u32,
    rect: Rect,
}

struct RegionQuadTree {
    tree: IcosepQuadTree<Item>,
    root: NodeId,
    bounds: Rect,
    max_depth: usize,
}

fn quadrant(bounds: Rect, zone: QuadTreeZone) -> Rect {
    let c = bounds.center();
    let (x0, x1) = if zone.is_east() {
        (c.x, bounds.x1)
    } else {
        (bounds.x0, c.x)
    };
    let (y0, y1) = if zone.is_south() {
        (c.y, bounds.y1)
    } else {
        (bounds.y0, c.y)
    };
    Rect::new(x0, y0, x1, y1)
}

/// Quadrant fully containing `rect`, or `None` if it crosses a median line.
fn classify(bounds: Rect, rect: Rect) -> Option<QuadTreeZone> {
    let c = bounds.center();
    let straddles_x = rect.x0 < c.x && rect.x1 > c.x;
    let straddles_y = rect.y0 < c.y && rect.y1 > c.y;
    if straddles_x || straddles_y {
        return None;
    }
    Some(QuadTreeZone::from_sides(rect.x0 >= c.x, rect.y0 >= c.y))
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

impl RegionQuadTree {
    fn new(bounds: Rect, max_depth: usize) -> Self {
        let mut tree = IcosepQuadTree::new();
        let root = tree.create_node();
        Self {
            tree,
            root,
            bounds,
            max_depth,
        }
    }

    /// Store `item` and return the node holding it.
    fn insert(&mut self, item: Item) -> NodeId {
        let mut node = self.root;
        let mut bounds = self.bounds;
        for _ in 0..self.max_depth {
            let Some(zone) = classify(bounds, item.rect) else {
                let straddlers = match self.tree.icosep_child(node) {
                    Some(s) => s,
                    None => {
                        let s = self.tree.create_node();
                        self.tree.set_icosep_child(node, Some(s));
                        s
                    }
                };
                self.tree.add_user_data(straddlers, item);
                return straddlers;
            };
            node = match self.tree.base_child(node, zone) {
                Some(child) => child,
                None => {
                    let child = self.tree.create_node();
                    self.tree.set_base_child(node, zone, Some(child));
                    child
                }
            };
            bounds = quadrant(bounds, zone);
        }
        self.tree.add_user_data(node, item);
        node
    }

    /// Items overlapping `area`.
    fn query(&self, area: Rect) -> Vec<u32> {
        let mut hits = Vec::new();
        let mut stack = vec![(self.root, self.bounds)];
        while let Some((node, bounds)) = stack.pop() {
            hits.extend(
                self.tree
                    .user_data(node)
                    .iter()
                    .filter(|item| overlaps(item.rect, area))
                    .map(|item| item.id),
            );
            if let Some(s) = self.tree.icosep_child(node) {
                stack.push((s, bounds));
            }
            for &zone in QuadTreeZone::ALL {
                let sub = quadrant(bounds, zone);
                if let Some(child) = self.tree.base_child(node, zone)
                    && overlaps(sub, area)
                {
                    stack.push((child, sub));
                }
            }
        }
        hits.sort_unstable();
        hits
    }

    /// Remove `item`, destroying any trail of cells left empty.
    fn remove(&mut self, item: Item) -> bool {
        let Some(node) = self
            .tree
            .prefix_nodes(self.root)
            .find(|&n| self.tree.user_data(n).contains(&item))
        else {
            return false;
        };
        self.tree.remove_user_data(node, &item);
        if node != self.root && self.tree.is_empty(node) {
            self.tree.remove_deeply_from_parent(node);
            let top = std::iter::once(node)
                .chain(self.tree.ancestors(node))
                .last()
                .unwrap_or(node);
            self.tree.remove(top);
        }
        true
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut index = RegionQuadTree::new(Rect::new(0.0, 0.0, 256.0, 256.0), 4);
    let structure_changes = Rc::new(Cell::new(0_usize));
    let counter = structure_changes.clone();
    index.tree.add_listener_for(
        index.root,
        EventMask::STRUCTURE,
        move |_: &TreeNodeEvent<'_, Item>| counter.set(counter.get() + 1),
    );

    let items = [
        Item {
            id: 1,
            rect: Rect::new(4.0, 4.0, 12.0, 12.0),
        },
        Item {
            id: 2,
            rect: Rect::new(200.0, 10.0, 220.0, 30.0),
        },
        Item {
            id: 3,
            // Crosses the vertical median of the root.
            rect: Rect::new(120.0, 40.0, 140.0, 60.0),
        },
        Item {
            id: 4,
            rect: Rect::from_center_size(Point::new(192.0, 192.0), (8.0, 8.0)),
        },
    ];
    for item in items {
        let holder = index.insert(item);
        println!(
            "item {} stored at depth {} (zone {:?})",
            item.id,
            index.tree.depth(holder),
            index.tree.zone(holder)
        );
    }
    println!(
        "nodes: {}, max height: {}, structural events: {}",
        index.tree.node_count(),
        index.tree.max_height(index.root),
        structure_changes.get()
    );

    let hits = index.query(Rect::new(0.0, 0.0, 150.0, 100.0));
    println!("query top-left band: {hits:?}");
    assert_eq!(hits, [1, 3], "straddler is found through the icosep slot");

    let before = index.tree.node_count();
    assert!(index.remove(items[0]), "item 1 is stored");
    println!(
        "removed item 1: nodes {before} -> {}",
        index.tree.node_count()
    );
    assert_eq!(index.query(index.bounds), [2, 3, 4]);
}
