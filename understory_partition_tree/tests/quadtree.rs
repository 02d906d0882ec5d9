// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use rstest::{fixture, rstest};
use understory_partition_tree::{
    EventMask, IcosepQuadTree, IcosepQuadTreeZone, IcosepZone, NodeId, QuadTree, QuadTreeZone,
    TreeNodeEvent, Zone,
};

struct Quad {
    tree: QuadTree<&'static str>,
    root: NodeId,
    q1: NodeId,
}

#[fixture]
fn quad() -> Quad {
    let mut tree = QuadTree::new();
    let root = tree.create_node_with("root");
    let q1 = tree.create_node_with("q1");
    Quad { tree, root, q1 }
}

#[rstest]
fn attach_and_detach_north_west(quad: Quad) {
    let Quad {
        mut tree, root, q1, ..
    } = quad;

    assert!(tree.set_child(root, QuadTreeZone::NorthWest, Some(q1)));
    assert_eq!(tree.not_null_child_count(root), 1);
    assert_eq!(tree.max_height(root), 2);
    assert_eq!(tree.parent(q1), Some(root));

    assert_eq!(tree.remove_from_parent(q1), Some(root));
    assert_eq!(tree.child(root, QuadTreeZone::NorthWest), None);
    assert!(tree.is_root(q1));
    assert!(tree.is_leaf(root));
    assert_eq!(tree.remove_from_parent(q1), None, "already a root");
}

#[rstest]
#[case(QuadTreeZone::NorthWest)]
#[case(QuadTreeZone::NorthEast)]
#[case(QuadTreeZone::SouthWest)]
#[case(QuadTreeZone::SouthEast)]
fn each_quadrant_reports_its_zone(quad: Quad, #[case] zone: QuadTreeZone) {
    let Quad {
        mut tree, root, q1, ..
    } = quad;
    tree.set_child(root, zone, Some(q1));
    assert_eq!(tree.zone(q1), Some(zone));
    assert_eq!(tree.index_of(root, q1), Some(zone.ordinal()));
    let expected: Vec<_> = QuadTreeZone::ALL
        .iter()
        .map(|&z| (z == zone).then_some(q1))
        .collect();
    assert_eq!(tree.children_array(root), expected);
}

#[rstest]
fn data_events_bubble_with_slices(quad: Quad) {
    let Quad {
        mut tree, root, q1, ..
    } = quad;
    tree.set_child(root, QuadTreeZone::SouthEast, Some(q1));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    tree.add_listener_for(
        root,
        EventMask::DATA_CHANGED,
        move |e: &TreeNodeEvent<'_, &'static str>| {
            if let TreeNodeEvent::DataChanged { node, current, .. } = *e {
                sink.borrow_mut().push((node, current.to_vec(), e.data_delta()));
            }
        },
    );

    tree.add_user_data(q1, "extra");
    tree.remove_from_parent(q1);
    tree.remove_user_data(q1, &"q1");
    assert_eq!(*seen.borrow(), vec![(q1, vec!["q1", "extra"], 1)]);
    assert_eq!(
        tree.prefix_user_data(root).copied().collect::<Vec<_>>(),
        ["root"]
    );
}

#[rstest]
#[case(IcosepQuadTreeZone::NorthWest)]
#[case(IcosepQuadTreeZone::SouthEast)]
fn icosep_slot_coexists_with_base_slot(#[case] base: IcosepQuadTreeZone) {
    let mut tree: IcosepQuadTree<()> = IcosepQuadTree::new();
    let root = tree.create_node();
    let straddler = tree.create_node();
    let cell = tree.create_node();

    assert!(tree.set_icosep_child(root, Some(straddler)));
    assert!(tree.set_child(root, base, Some(cell)));
    assert_eq!(tree.index_of(root, straddler), Some(4));
    assert_eq!(tree.zone(straddler), Some(IcosepQuadTreeZone::ICOSEP));
    assert_eq!(tree.zone(cell).and_then(IcosepZone::to_base), base.to_base());
    assert_eq!(tree.not_null_child_count(root), 2);

    tree.remove(straddler);
    assert!(!tree.is_alive(straddler));
    assert_eq!(tree.icosep_child(root), None);
    assert_eq!(tree.child(root, base), Some(cell));
    assert!(!tree.set_icosep_child(root, Some(straddler)), "stale ids are refused");
}
