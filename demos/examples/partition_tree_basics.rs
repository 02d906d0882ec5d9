// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition tree basics.
//!
//! Attach, move, and prune quadtree nodes while a listener on the root prints every change.
//!
//! Run:
//! - `cargo run -p understory_partition_demos --example partition_tree_basics`
//! - `RUST_LOG=understory_partition_tree=trace cargo run -p understory_partition_demos --example partition_tree_basics`

use tracing_subscriber::EnvFilter;
use understory_partition_tree::{QuadTree, QuadTreeZone, TreeNodeEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree: QuadTree<&'static str> = QuadTree::new();
    let root = tree.create_node_with("root");
    tree.add_listener(root, |event: &TreeNodeEvent<'_, &'static str>| {
        println!("  {event:?}");
    });

    println!("attach q1 and q2");
    let q1 = tree.create_node_with("q1");
    let q2 = tree.create_node_with("q2");
    tree.set_child(root, QuadTreeZone::NorthWest, Some(q1));
    tree.set_child(root, QuadTreeZone::SouthEast, Some(q2));

    println!("grow a chain under q1");
    let leaf = tree.create_node();
    let mid = tree.create_node();
    tree.set_child(q1, QuadTreeZone::NorthEast, Some(mid));
    tree.set_child(mid, QuadTreeZone::SouthWest, Some(leaf));
    println!(
        "depth(leaf) = {}, heights = {:?}",
        tree.depth(leaf),
        tree.heights(root)
    );

    println!("move leaf under q2");
    let moved = tree.move_to_zone(leaf, Some(q2), QuadTreeZone::NorthWest);
    assert!(moved, "leaf changes parent");

    println!("prune the now-empty chain under q1");
    let cut_from = tree.remove_deeply_from_parent(mid);
    println!("cut from {cut_from:?}");

    println!("clear the root");
    tree.clear(root);
    assert!(tree.is_empty(root));
    println!("live nodes: {}", tree.node_count());
}
