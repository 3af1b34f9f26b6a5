// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Neurite Segments

A segment is a contiguous polyline piece of a reconstructed neuron skeleton:
nodes with local radii, a morphological class, and synapses attached to
individual nodes.

This crate provides:
- **Geometry**: path length, frustum surface area and volume, tortuosity,
  spine-shape radius ratio, centers and nearest-node lookup
- **Synapse slot maps**: at most one synapse per node, with nearest-free-slot
  placement on collision
- **Classification**: axon/dendrite heuristic from synapse occupancy
- **Editing**: split, merge, range removal, deduplication and translation that
  keep node positions and synapse slots in step

Indices are 0-based throughout and ranges are half-open.

## Example

```rust
use neurite_segment::{Class, Node, Segment, SynapseId};

let mut seg = Segment::new(vec![
    Node::new(0.0, 0.0, 0.0, 1.0),
    Node::new(0.0, 0.0, 10.0, 1.0),
]);
seg.attach_pre_synapse(1, SynapseId(42));

assert_eq!(seg.path_length(), 10.0);
assert_eq!(seg.adjust_class(), Class::Axon);
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bounding_box;
pub mod classifier;
pub mod editor;
pub mod features;
pub mod geometry;
pub mod segment;
pub mod synapse;
pub mod types;

pub use bounding_box::BoundingBox;
pub use classifier::classify;
pub use features::{batch_features, SegmentFeatures};
pub use segment::{DedupeReport, Segment};
pub use synapse::{AttachOutcome, SynapseId, SynapseKind, SynapseSlotMap};
pub use types::{Class, Node, NodeChain, SegmentError, SegmentResult};

// Heuristic parameters live in the config crate
pub use neurite_config::SegmentConfig;
