// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Property tests for segment geometry and edits.

Covers the invariants that must hold for arbitrary chains:
- path length never undercuts the endpoint distance (tortuosity >= 1)
- frustum area and volume do not depend on traversal direction
- merge followed by split at the join restores both inputs
- single-node removal shifts later attachments down by one
- attachment never escapes the slot domain, and requests past the last node
  are dropped
*/

use neurite_segment::{geometry, AttachOutcome, Node, Segment, SynapseId, SynapseKind};
use proptest::prelude::*;

fn node_strategy() -> impl Strategy<Value = Node> {
    (-500.0f32..500.0, -500.0f32..500.0, -500.0f32..500.0, 0.1f32..10.0)
        .prop_map(|(x, y, z, r)| Node::new(x, y, z, r))
}

fn chain_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node_strategy(), min..max)
}

fn relative_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

/// Segment with synapses attached at the given (index, kind) pairs
fn with_synapses(nodes: Vec<Node>, picks: &[(usize, bool)]) -> Segment {
    let len = nodes.len();
    let mut seg = Segment::new(nodes);
    for (n, &(i, pre)) in picks.iter().enumerate() {
        let kind = if pre { SynapseKind::Pre } else { SynapseKind::Post };
        seg.attach_synapse(kind, i % len, SynapseId(n as u64));
    }
    seg
}

proptest! {
    #[test]
    fn tortuosity_at_least_one(chain in chain_strategy(2, 30)) {
        let first = chain[0];
        let last = chain[chain.len() - 1];
        prop_assume!(first.distance_to(&last) > 1e-3);
        let t = geometry::tortuosity(&chain).unwrap();
        prop_assert!(t >= 1.0 - 1e-4, "tortuosity {} < 1", t);
    }

    #[test]
    fn area_and_volume_reversal_invariant(chain in chain_strategy(1, 30)) {
        let mut reversed = chain.clone();
        reversed.reverse();
        prop_assert!(relative_eq(
            geometry::surface_area(&chain),
            geometry::surface_area(&reversed)
        ));
        prop_assert!(relative_eq(geometry::volume(&chain), geometry::volume(&reversed)));
        prop_assert!(relative_eq(geometry::path_length(&chain), geometry::path_length(&reversed)));
    }

    #[test]
    fn merge_then_split_round_trip(
        a in chain_strategy(1, 15),
        b in chain_strategy(1, 15),
        picks_a in prop::collection::vec((0usize..100, any::<bool>()), 0..10),
        picks_b in prop::collection::vec((0usize..100, any::<bool>()), 0..10),
    ) {
        let seg_a = with_synapses(a, &picks_a);
        let seg_b = with_synapses(b, &picks_b);

        let merged = seg_a.merge(&seg_b);
        prop_assert_eq!(merged.len(), seg_a.len() + seg_b.len());
        prop_assert_eq!(
            merged.num_pre_synapses() + merged.num_post_synapses(),
            seg_a.num_pre_synapses() + seg_a.num_post_synapses()
                + seg_b.num_pre_synapses() + seg_b.num_post_synapses()
        );

        let (first, second) = merged.split(seg_a.len()).unwrap();
        prop_assert_eq!(first.nodes(), seg_a.nodes());
        prop_assert_eq!(second.nodes(), seg_b.nodes());
        prop_assert_eq!(first.slot_map(SynapseKind::Pre), seg_a.slot_map(SynapseKind::Pre));
        prop_assert_eq!(second.slot_map(SynapseKind::Post), seg_b.slot_map(SynapseKind::Post));
    }

    #[test]
    fn remove_single_node_reindexes(
        chain in chain_strategy(2, 20),
        picks in prop::collection::vec((0usize..100, any::<bool>()), 0..15),
        victim in 0usize..100,
    ) {
        let seg = with_synapses(chain, &picks);
        let i = victim % seg.len();
        let trimmed = seg.remove_nodes(i..i + 1).unwrap();
        prop_assert_eq!(trimmed.len(), seg.len() - 1);

        for kind in [SynapseKind::Pre, SynapseKind::Post] {
            let before = seg.slot_map(kind);
            let after = trimmed.slot_map(kind);
            prop_assert_eq!(after.len(), trimmed.len());
            for (j, synapse) in before.iter() {
                if j < i {
                    prop_assert_eq!(after.get(j), Some(synapse));
                } else if j > i {
                    prop_assert_eq!(after.get(j - 1), Some(synapse));
                }
            }
            let expected = before.count() - usize::from(before.is_occupied(i));
            prop_assert_eq!(after.count(), expected);
        }
    }

    #[test]
    fn attachments_stay_in_domain(
        len in 1usize..25,
        requests in prop::collection::vec(0usize..40, 0..60),
    ) {
        let nodes = (0..len).map(|i| Node::new(i as f32, 0.0, 0.0, 1.0)).collect();
        let mut seg: Segment = Segment::new(nodes);
        let mut attached = 0;
        for (n, &index) in requests.iter().enumerate() {
            match seg.attach_pre_synapse(index, SynapseId(n as u64)) {
                AttachOutcome::Attached { slot } => {
                    prop_assert!(index < len, "node {} outside chain of {} was placed", index, len);
                    prop_assert!(slot < len);
                    prop_assert!(slot.abs_diff(index) <= 3);
                    attached += 1;
                }
                AttachOutcome::Duplicate | AttachOutcome::Dropped => {}
            }
        }
        prop_assert_eq!(seg.num_pre_synapses(), attached);
        prop_assert!(seg.pre_synapses().all(|(i, _)| i < len));
    }
}
