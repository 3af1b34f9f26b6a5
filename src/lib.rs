// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # neurite - Neuron Skeleton Segments
//!
//! Post-processing primitives for reconstructed neuron skeletons. A skeleton is
//! cut into segments (polylines of nodes with radii); each segment carries a
//! morphological class and the synapses attached to its nodes.
//!
//! ## Crates
//!
//! - [`segment`]: geometry features, synapse slot maps, classification, edits
//! - [`config`]: `neurite_configuration.toml` loading, overrides and validation
//! - [`observability`]: logging initialization with per-crate debug flags
//!
//! ## Usage
//!
//! ```rust
//! use neurite::prelude::*;
//!
//! let config = NeuriteConfig::default();
//! let mut seg = Segment::new(vec![
//!     Node::new(0.0, 0.0, 0.0, 1.0),
//!     Node::new(0.0, 0.0, 10.0, 1.0),
//! ]);
//! seg.attach_synapse_with(SynapseKind::Post, 0, SynapseId(7), &config.segment);
//! seg.adjust_class_with(&config.segment);
//!
//! assert_eq!(seg.class(), Class::Dendrite);
//! let features = seg.features()?;
//! assert_eq!(features.num_post_synapses, 1);
//! # Ok::<(), SegmentError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use neurite_config as config;
pub use neurite_observability as observability;
pub use neurite_segment as segment;

pub mod prelude {
    pub use neurite_config::{
        load_config, validate_config, LoggingConfig, NeuriteConfig, SegmentConfig,
    };
    pub use neurite_observability::{init_logging, parse_debug_flags, CrateDebugFlags};
    pub use neurite_segment::{
        batch_features, AttachOutcome, BoundingBox, Class, DedupeReport, Node, NodeChain, Segment,
        SegmentError, SegmentFeatures, SegmentResult, SynapseId, SynapseKind, SynapseSlotMap,
    };
}
