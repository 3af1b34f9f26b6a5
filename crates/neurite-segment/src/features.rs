// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Feature vector consumed by downstream segment classification.
*/

use serde::{Deserialize, Serialize};

use crate::geometry::{mean, sample_std};
use crate::segment::Segment;
use crate::types::{SegmentError, SegmentResult};

/// Shape and connectivity features of one segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentFeatures {
    pub path_length: f32,
    pub surface_area: f32,
    pub volume: f32,
    pub mean_radius: f32,
    /// Sample standard deviation; 0.0 for a single node
    pub std_radius: f32,
    pub num_pre_synapses: usize,
    pub num_post_synapses: usize,
    pub tortuosity: f32,
}

impl SegmentFeatures {
    /// Fields in declaration order, for numeric feature matrices
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.path_length,
            self.surface_area,
            self.volume,
            self.mean_radius,
            self.std_radius,
            self.num_pre_synapses as f32,
            self.num_post_synapses as f32,
            self.tortuosity,
        ]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<S> Segment<S> {
    /// # Errors
    /// `EmptyChain` for an empty segment; `DegenerateTortuosity` when the
    /// endpoints of a multi-node segment coincide.
    pub fn features(&self) -> SegmentResult<SegmentFeatures> {
        if self.is_empty() {
            return Err(SegmentError::EmptyChain);
        }
        let radii = self.radius_list();
        Ok(SegmentFeatures {
            path_length: self.path_length(),
            surface_area: self.surface_area(),
            volume: self.volume(),
            mean_radius: mean(&radii),
            std_radius: sample_std(&radii),
            num_pre_synapses: self.num_pre_synapses(),
            num_post_synapses: self.num_post_synapses(),
            tortuosity: self.tortuosity()?,
        })
    }
}

/// Features of every segment, in input order.
///
/// Runs in parallel when the `parallel` feature is enabled.
pub fn batch_features<S: Sync>(segments: &[Segment<S>]) -> Vec<SegmentResult<SegmentFeatures>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        segments.par_iter().map(Segment::features).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        segments.iter().map(Segment::features).collect()
    }
}
