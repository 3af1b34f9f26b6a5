// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synapse attachment
//!
//! Synapses are owned elsewhere; segments only keep equality-comparable
//! handles in per-node slot maps.

use core::fmt;

pub mod slot_map;

pub use slot_map::{probe_sequence, AttachOutcome, SynapseSlotMap};

/// Which side of the contact the segment is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynapseKind {
    /// Segment is the presynaptic (output) partner
    Pre,
    /// Segment is the postsynaptic (input) partner
    Post,
}

impl fmt::Display for SynapseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynapseKind::Pre => f.write_str("pre"),
            SynapseKind::Post => f.write_str("post"),
        }
    }
}

/// Lightweight synapse handle for callers without their own synapse type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynapseId(pub u64);

impl fmt::Display for SynapseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synapse({})", self.0)
    }
}
