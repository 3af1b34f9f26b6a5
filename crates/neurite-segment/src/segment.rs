// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Segment aggregate.

A segment owns its node chain, a class tag and two synapse slot maps (pre and
post) whose domains always equal the chain length.

Operations come in two groups:
- in-place mutations on `&mut self`: attachment, [`Segment::set_class`],
  [`Segment::adjust_class`] and [`Segment::remove_redundant_nodes`];
- transforms on `&self` returning new segments: translate, remove_nodes,
  split and merge (see `editor`).
*/

use core::ops::Range;

use neurite_config::SegmentConfig;
use tracing::{debug, warn};

use crate::bounding_box::BoundingBox;
use crate::geometry;
use crate::synapse::{AttachOutcome, SynapseId, SynapseKind, SynapseSlotMap};
use crate::types::{Class, Node, NodeChain, SegmentError, SegmentResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment<S = SynapseId> {
    nodes: NodeChain,
    class: Class,
    pre_synapses: SynapseSlotMap<S>,
    post_synapses: SynapseSlotMap<S>,
}

/// Outcome of [`Segment::remove_redundant_nodes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupeReport {
    /// Nodes collapsed away
    pub removed_nodes: usize,
    /// Attachments moved from a collapsed node to a surviving slot
    pub relocated: usize,
    /// Attachments lost (no free slot, or beyond the shrunken domain)
    pub dropped: usize,
}

impl<S> Default for Segment<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> Segment<S> {
    /// Undefined-class segment with empty slot maps sized to `nodes`
    pub fn new(nodes: NodeChain) -> Self {
        Self::with_class(nodes, Class::Undefined)
    }

    pub fn with_class(nodes: NodeChain, class: Class) -> Self {
        let len = nodes.len();
        Self {
            nodes,
            class,
            pre_synapses: SynapseSlotMap::new(len),
            post_synapses: SynapseSlotMap::new(len),
        }
    }

    /// Assemble a segment from pre-built slot maps.
    ///
    /// # Errors
    /// `SlotDomainMismatch` if either map's domain differs from the chain length.
    pub fn from_parts(
        nodes: NodeChain,
        class: Class,
        pre_synapses: SynapseSlotMap<S>,
        post_synapses: SynapseSlotMap<S>,
    ) -> SegmentResult<Self> {
        for map in [&pre_synapses, &post_synapses] {
            if map.len() != nodes.len() {
                return Err(SegmentError::SlotDomainMismatch {
                    expected: nodes.len(),
                    actual: map.len(),
                });
            }
        }
        Ok(Self {
            nodes,
            class,
            pre_synapses,
            post_synapses,
        })
    }

    /// Canonical empty segment: no nodes, undefined class, no slots
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn into_nodes(self) -> NodeChain {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn class(&self) -> Class {
        self.class
    }

    /// External class assignment (the only way to reach `Soma`)
    pub fn set_class(&mut self, class: Class) {
        self.class = class;
    }

    pub fn slot_map(&self, kind: SynapseKind) -> &SynapseSlotMap<S> {
        match kind {
            SynapseKind::Pre => &self.pre_synapses,
            SynapseKind::Post => &self.post_synapses,
        }
    }

    fn slot_map_mut(&mut self, kind: SynapseKind) -> &mut SynapseSlotMap<S> {
        match kind {
            SynapseKind::Pre => &mut self.pre_synapses,
            SynapseKind::Post => &mut self.post_synapses,
        }
    }

    /// Presynaptic attachments as `(node index, synapse)` in node order
    pub fn pre_synapses(&self) -> impl Iterator<Item = (usize, &S)> {
        self.pre_synapses.iter()
    }

    /// Postsynaptic attachments as `(node index, synapse)` in node order
    pub fn post_synapses(&self) -> impl Iterator<Item = (usize, &S)> {
        self.post_synapses.iter()
    }

    pub fn num_pre_synapses(&self) -> usize {
        self.pre_synapses.count()
    }

    pub fn num_post_synapses(&self) -> usize {
        self.post_synapses.count()
    }

    /// Crate-internal constructor for edits whose slot domains are correct by construction
    pub(crate) fn assemble(
        nodes: NodeChain,
        class: Class,
        pre_synapses: SynapseSlotMap<S>,
        post_synapses: SynapseSlotMap<S>,
    ) -> Self {
        debug_assert_eq!(pre_synapses.len(), nodes.len());
        debug_assert_eq!(post_synapses.len(), nodes.len());
        Self {
            nodes,
            class,
            pre_synapses,
            post_synapses,
        }
    }

    // ---- geometry -------------------------------------------------------

    pub fn path_length(&self) -> f32 {
        geometry::path_length(&self.nodes)
    }

    pub fn radius_list(&self) -> Vec<f32> {
        geometry::radius_list(&self.nodes)
    }

    pub fn surface_area(&self) -> f32 {
        geometry::surface_area(&self.nodes)
    }

    pub fn volume(&self) -> f32 {
        geometry::volume(&self.nodes)
    }

    pub fn tortuosity(&self) -> SegmentResult<f32> {
        geometry::tortuosity(&self.nodes)
    }

    pub fn tail_head_radius_ratio(&self) -> SegmentResult<f32> {
        geometry::tail_head_radius_ratio(&self.nodes)
    }

    pub fn center(&self, range: Range<usize>) -> SegmentResult<Node> {
        geometry::center(&self.nodes, range)
    }

    /// Mean of every node (positions and radius)
    pub fn mass_center(&self) -> SegmentResult<Node> {
        if self.nodes.is_empty() {
            return Err(SegmentError::EmptyChain);
        }
        geometry::center(&self.nodes, 0..self.nodes.len())
    }

    pub fn nearest_point(&self, point: &[f32]) -> SegmentResult<(f32, usize)> {
        geometry::nearest_point(&self.nodes, point)
    }

    /// Distance from `point` to the segment's bounding box
    pub fn distance_from(&self, point: &[f32]) -> SegmentResult<f32> {
        geometry::bounding_box_distance(&self.nodes, point)
    }

    /// Computed on demand; `None` for an empty segment
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_nodes(&self.nodes)
    }

    // ---- synapses -------------------------------------------------------

    /// Synapses per path length, scaled by `density_scale` (1000 by default).
    ///
    /// A zero-length segment yields a non-finite value rather than an error.
    pub fn synapse_density(&self, kind: SynapseKind) -> f32 {
        self.synapse_density_with(kind, &SegmentConfig::default())
    }

    pub fn synapse_density_with(&self, kind: SynapseKind, config: &SegmentConfig) -> f32 {
        self.slot_map(kind).count() as f32 / self.path_length() * config.density_scale
    }

    pub fn pre_synapse_density(&self) -> f32 {
        self.synapse_density(SynapseKind::Pre)
    }

    pub fn post_synapse_density(&self) -> f32 {
        self.synapse_density(SynapseKind::Post)
    }
}

impl<S: PartialEq> Segment<S> {
    pub fn attach_pre_synapse(&mut self, index: usize, synapse: S) -> AttachOutcome {
        self.attach_synapse(SynapseKind::Pre, index, synapse)
    }

    pub fn attach_post_synapse(&mut self, index: usize, synapse: S) -> AttachOutcome {
        self.attach_synapse(SynapseKind::Post, index, synapse)
    }

    pub fn attach_synapse(&mut self, kind: SynapseKind, index: usize, synapse: S) -> AttachOutcome {
        self.attach_synapse_with(kind, index, synapse, &SegmentConfig::default())
    }

    /// Attach at `index`, probing up to `config.probe_radius` slots either side
    /// on collision. Duplicates and drops are logged and reported, never raised.
    pub fn attach_synapse_with(
        &mut self,
        kind: SynapseKind,
        index: usize,
        synapse: S,
        config: &SegmentConfig,
    ) -> AttachOutcome {
        let outcome = self.slot_map_mut(kind).attach(index, synapse, config.probe_radius);
        match outcome {
            AttachOutcome::Attached { slot } if slot != index => {
                debug!(
                    target: "neurite-segment",
                    "{} synapse for node {} placed at {}",
                    kind, index, slot
                );
            }
            AttachOutcome::Attached { .. } => {}
            AttachOutcome::Duplicate => {
                warn!(
                    target: "neurite-segment",
                    "Duplicate {} synapse at node {}; ignored",
                    kind, index
                );
            }
            AttachOutcome::Dropped if index >= self.len() => {
                warn!(
                    target: "neurite-segment",
                    "{} synapse for node {} outside chain of {} nodes; synapse dropped",
                    kind, index, self.len()
                );
            }
            AttachOutcome::Dropped => {
                warn!(
                    target: "neurite-segment",
                    "No free {} slot within {} of node {}; synapse dropped",
                    kind, config.probe_radius, index
                );
            }
        }
        outcome
    }

    /// Collapse runs of identical consecutive nodes, keeping the last node of
    /// each run (so the final node always survives).
    pub fn remove_redundant_nodes(&mut self) -> DedupeReport {
        self.remove_redundant_nodes_with(&SegmentConfig::default())
    }

    /// With `reindex_on_dedupe`, attachments follow their node to the survivor
    /// of its run, falling back to the probe heuristic on collision. Without it,
    /// slot indices are left as they were and only entries past the new end
    /// are truncated.
    pub fn remove_redundant_nodes_with(&mut self, config: &SegmentConfig) -> DedupeReport {
        let old_len = self.nodes.len();
        if old_len < 2 {
            return DedupeReport::default();
        }

        // new_index[i]: position of the survivor representing node i
        let mut new_index = Vec::with_capacity(old_len);
        let mut kept = Vec::with_capacity(old_len);
        let mut survivor_of = Vec::with_capacity(old_len);
        for i in 0..old_len {
            let is_kept = i == old_len - 1 || self.nodes[i] != self.nodes[i + 1];
            new_index.push(kept.len());
            survivor_of.push(is_kept);
            if is_kept {
                kept.push(self.nodes[i]);
            }
        }

        let new_len = kept.len();
        let mut report = DedupeReport {
            removed_nodes: old_len - new_len,
            ..DedupeReport::default()
        };
        if report.removed_nodes == 0 {
            return report;
        }
        self.nodes = kept;

        for kind in [SynapseKind::Pre, SynapseKind::Post] {
            let map = self.slot_map_mut(kind);
            if !config.reindex_on_dedupe {
                report.dropped += map.truncate(new_len);
                continue;
            }

            let entries = map.drain_into_domain(new_len);
            let (direct, moved): (Vec<_>, Vec<_>) =
                entries.into_iter().partition(|(i, _)| survivor_of[*i]);
            for (i, synapse) in direct {
                map.attach(new_index[i], synapse, 0);
            }
            for (i, synapse) in moved {
                match map.attach(new_index[i], synapse, config.probe_radius) {
                    AttachOutcome::Attached { .. } => report.relocated += 1,
                    AttachOutcome::Duplicate | AttachOutcome::Dropped => report.dropped += 1,
                }
            }
        }

        if report.dropped > 0 {
            warn!(
                target: "neurite-segment",
                "Dedupe removed {} nodes and dropped {} synapse attachments",
                report.removed_nodes, report.dropped
            );
        } else {
            debug!(target: "neurite-segment", "Dedupe removed {} nodes", report.removed_nodes);
        }
        report
    }
}
