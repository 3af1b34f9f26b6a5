// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Axis-aligned bounding box over node positions

use serde::{Deserialize, Serialize};

use crate::types::Node;

/// Axis-aligned box spanning node positions (radii are not included)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Smallest box containing every node position; `None` for an empty list
    pub fn from_nodes(nodes: &[Node]) -> Option<Self> {
        let first = nodes.first()?;
        let mut bbox = BoundingBox {
            min: first.position(),
            max: first.position(),
        };
        for node in &nodes[1..] {
            bbox.include(node.position());
        }
        Some(bbox)
    }

    fn include(&mut self, p: [f32; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p[axis]);
            self.max[axis] = self.max[axis].max(p[axis]);
        }
    }

    /// Euclidean distance from `point` to the box; 0 inside or on the boundary
    pub fn distance_from(&self, point: [f32; 3]) -> f32 {
        let mut sum = 0.0f32;
        for axis in 0..3 {
            let d = if point[axis] < self.min[axis] {
                self.min[axis] - point[axis]
            } else if point[axis] > self.max[axis] {
                point[axis] - self.max[axis]
            } else {
                0.0
            };
            sum += d * d;
        }
        sum.sqrt()
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut merged = *self;
        merged.include(other.min);
        merged.include(other.max);
        merged
    }

    pub fn contains(&self, point: [f32; 3]) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::from_nodes(&[Node::new(0.0, 0.0, 0.0, 1.0), Node::new(1.0, 1.0, 1.0, 1.0)])
            .unwrap()
    }

    #[test]
    fn test_from_nodes() {
        assert!(BoundingBox::from_nodes(&[]).is_none());
        let bbox = BoundingBox::from_nodes(&[
            Node::new(1.0, -2.0, 3.0, 0.0),
            Node::new(-1.0, 2.0, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bbox.min, [-1.0, -2.0, 0.0]);
        assert_eq!(bbox.max, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_distance_from() {
        let bbox = unit_box();
        assert_eq!(bbox.distance_from([0.5, 0.5, 0.5]), 0.0);
        assert_eq!(bbox.distance_from([4.0, 0.5, 0.5]), 3.0);
        assert_eq!(bbox.distance_from([4.0, 5.0, 0.5]), 5.0);
    }

    #[test]
    fn test_union() {
        let other = BoundingBox { min: [2.0, 2.0, 2.0], max: [3.0, 3.0, 3.0] };
        let merged = unit_box().union(&other);
        assert_eq!(merged.min, [0.0, 0.0, 0.0]);
        assert_eq!(merged.max, [3.0, 3.0, 3.0]);
        assert!(merged.contains([2.5, 0.5, 1.0]));
    }
}
