// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_partition_tree::{
    IcosepOctTree, IcosepOctTreeZone, NodeId, OctTreeZone, QuadTree, Tree, TreeNodeEvent, Zone,
};

/// Complete tree of the given depth; returns the root and the leaves in slot order.
fn build_full<Z: Zone>(tree: &mut Tree<u32, Z>, depth: usize) -> (NodeId, Vec<NodeId>) {
    let root = tree.create_node();
    let mut level = vec![root];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * tree.child_count());
        for &parent in &level {
            for i in 0..tree.child_count() {
                let child = tree.create_node();
                tree.set_child_at(parent, i, Some(child));
                next.push(child);
            }
        }
        level = next;
    }
    (root, level)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &depth in &[3usize, 5, 6] {
        let nodes: usize = (0..=depth).map(|d| 4usize.pow(d as u32)).sum();
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_function(format!("quad_full_depth{}", depth), |b| {
            b.iter_batched(
                || QuadTree::<u32>::with_capacity(nodes),
                |mut tree| {
                    let (root, leaves) = build_full(&mut tree, depth);
                    black_box((root, leaves.len()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");
    let moves = 1024usize;
    group.throughput(Throughput::Elements(moves as u64));
    group.bench_function("quad_random_leaf_moves", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::<u32>::new();
                let (root, leaves) = build_full(&mut tree, 5);
                (tree, root, leaves)
            },
            |(mut tree, root, leaves)| {
                let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
                for _ in 0..moves {
                    let node = leaves[rng.below(leaves.len())];
                    let dest = leaves[rng.below(leaves.len())];
                    let _ = tree.move_to(node, Some(dest), rng.below(4), false);
                }
                black_box(tree.max_height(root));
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("icosep_oct_promote_to_icosep", |b| {
        b.iter_batched(
            || {
                let mut tree = IcosepOctTree::<u32>::new();
                let (root, leaves) = build_full(&mut tree, 3);
                (tree, root, leaves)
            },
            |(mut tree, root, leaves)| {
                for &leaf in &leaves {
                    if let Some(parent) = tree.parent(leaf)
                        && let Some(grand) = tree.parent(parent)
                    {
                        let _ = tree.move_to_zone(leaf, Some(grand), IcosepOctTreeZone::Icosep);
                    }
                }
                black_box(tree.deep_node_count(root));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &listeners in &[0usize, 1, 8] {
        group.bench_function(format!("deep_chain_listeners{}", listeners), |b| {
            b.iter_batched(
                || {
                    let mut tree = IcosepOctTree::<u32>::new();
                    let root = tree.create_node();
                    let mut tip = root;
                    for _ in 0..32 {
                        let next = tree.create_node();
                        tree.set_base_child(tip, OctTreeZone::SouthEastBack, Some(next));
                        tip = next;
                    }
                    for _ in 0..listeners {
                        tree.add_listener(root, |e: &TreeNodeEvent<'_, u32>| {
                            black_box(e.kind());
                        });
                    }
                    (tree, tip)
                },
                |(mut tree, tip)| {
                    for v in 0..64 {
                        tree.add_user_data(tip, v);
                    }
                    black_box(tree.remove_all_user_data(tip).len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let mut tree = QuadTree::<u32>::new();
    let (root, _) = build_full(&mut tree, 6);
    group.bench_function("quad_depth6_heights", |b| {
        b.iter(|| black_box((tree.min_height(root), tree.max_height(root))));
    });
    group.bench_function("quad_depth6_prefix_walk", |b| {
        b.iter(|| black_box(tree.prefix_nodes(root).count()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_move, bench_dispatch, bench_metrics);
criterion_main!(benches);
