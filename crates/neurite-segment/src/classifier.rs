// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Axon/dendrite heuristic from synapse occupancy and path length

use neurite_config::SegmentConfig;
use tracing::debug;

use crate::segment::Segment;
use crate::types::Class;

/// Class implied by synapse counts and length.
///
/// More outputs than inputs means axon, fewer means dendrite. A segment with
/// no synapses at all is an axon only when longer than
/// `config.long_orphan_path_length`; everything else falls back to dendrite.
pub fn classify(
    pre_count: usize,
    post_count: usize,
    path_length: f32,
    config: &SegmentConfig,
) -> Class {
    if pre_count > post_count {
        Class::Axon
    } else if pre_count < post_count {
        Class::Dendrite
    } else if pre_count == 0 && path_length > config.long_orphan_path_length {
        Class::Axon
    } else {
        Class::Dendrite
    }
}

impl<S> Segment<S> {
    /// Derive axon/dendrite for an undefined segment; any other class is left alone
    pub fn adjust_class(&mut self) -> Class {
        self.adjust_class_with(&SegmentConfig::default())
    }

    pub fn adjust_class_with(&mut self, config: &SegmentConfig) -> Class {
        if self.class() != Class::Undefined {
            return self.class();
        }
        let class = classify(
            self.num_pre_synapses(),
            self.num_post_synapses(),
            self.path_length(),
            config,
        );
        debug!(
            target: "neurite-segment",
            "Classified segment as {} (pre={}, post={})",
            class,
            self.num_pre_synapses(),
            self.num_post_synapses()
        );
        self.set_class(class);
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synapse::SynapseId;
    use crate::types::Node;

    #[test]
    fn test_classify_rules() {
        let config = SegmentConfig::default();
        assert_eq!(classify(3, 0, 6000.0, &config), Class::Axon);
        assert_eq!(classify(1, 2, 6000.0, &config), Class::Dendrite);
        assert_eq!(classify(0, 0, 10.0, &config), Class::Dendrite);
        assert_eq!(classify(0, 0, 5000.5, &config), Class::Axon);
        assert_eq!(classify(0, 0, 5000.0, &config), Class::Dendrite);
        // equal non-zero counts never take the orphan rule
        assert_eq!(classify(2, 2, 9000.0, &config), Class::Dendrite);
    }

    #[test]
    fn test_adjust_class_is_idempotent() {
        let nodes = vec![Node::new(0.0, 0.0, 0.0, 1.0), Node::new(0.0, 0.0, 10.0, 1.0)];
        let mut seg = Segment::new(nodes);
        seg.attach_pre_synapse(0, SynapseId(1));
        assert_eq!(seg.adjust_class(), Class::Axon);

        seg.attach_post_synapse(0, SynapseId(2));
        seg.attach_post_synapse(1, SynapseId(3));
        assert_eq!(seg.adjust_class(), Class::Axon);
    }

    #[test]
    fn test_soma_never_reclassified() {
        let soma = vec![Node::new(0.0, 0.0, 0.0, 5.0)];
        let mut seg: Segment = Segment::with_class(soma, Class::Soma);
        assert_eq!(seg.adjust_class(), Class::Soma);
    }

    #[test]
    fn test_custom_orphan_threshold() {
        let nodes = vec![Node::new(0.0, 0.0, 0.0, 1.0), Node::new(0.0, 0.0, 10.0, 1.0)];
        let mut seg: Segment = Segment::new(nodes);
        let config = SegmentConfig {
            long_orphan_path_length: 5.0,
            ..SegmentConfig::default()
        };
        assert_eq!(seg.adjust_class_with(&config), Class::Axon);
    }
}
