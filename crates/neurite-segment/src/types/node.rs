// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Skeleton node type

use serde::{Deserialize, Serialize};

/// A sampled point along a segment: position and local radius, in microns
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
}

/// Ordered node sequence; order carries path semantics
pub type NodeChain = Vec<Node>;

impl Node {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, r: f32) -> Self {
        Self { x, y, z, r }
    }

    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance between positions; radii are ignored
    #[inline]
    pub fn distance_to(&self, other: &Node) -> f32 {
        distance_3d(self.position(), other.position())
    }

    /// Copy shifted by `(dx, dy, dz)`, radius unchanged
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz, self.r)
    }
}

impl From<(f32, f32, f32, f32)> for Node {
    fn from((x, y, z, r): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, r)
    }
}

impl From<[f32; 4]> for Node {
    fn from([x, y, z, r]: [f32; 4]) -> Self {
        Self::new(x, y, z, r)
    }
}

#[inline]
pub(crate) fn distance_3d(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_radius() {
        let a = Node::new(0.0, 0.0, 0.0, 1.0);
        let b = Node::new(3.0, 4.0, 0.0, 100.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_translated() {
        let n = Node::new(1.0, 2.0, 3.0, 0.5).translated(1.0, -2.0, 0.5);
        assert_eq!(n, Node::new(2.0, 0.0, 3.5, 0.5));
    }
}
