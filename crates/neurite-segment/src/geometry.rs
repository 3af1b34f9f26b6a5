// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Geometric features of a node chain.

Pure functions over `&[Node]`. Consecutive nodes are treated as frusta (cone
segments) when estimating surface area and volume.
*/

use core::f32::consts::PI;
use core::ops::Range;

use crate::bounding_box::BoundingBox;
use crate::types::node::distance_3d;
use crate::types::{Node, SegmentError, SegmentResult};

/// Euclidean distance between two nodes, radii ignored
#[inline]
pub fn distance(a: &Node, b: &Node) -> f32 {
    a.distance_to(b)
}

/// Sum of consecutive distances along the whole chain
pub fn path_length(chain: &[Node]) -> f32 {
    chain.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Path length from the first node up to and including node `last`.
///
/// `last` past the end is clamped to the final node.
pub fn path_length_to(chain: &[Node], last: usize) -> f32 {
    if chain.is_empty() {
        return 0.0;
    }
    let end = last.min(chain.len() - 1);
    path_length(&chain[..=end])
}

pub fn radius_list(chain: &[Node]) -> Vec<f32> {
    chain.iter().map(|n| n.r).collect()
}

/// Total frustum lateral surface area: `π (r1 + r2) sqrt(h² + (r1 - r2)²)` per pair
pub fn surface_area(chain: &[Node]) -> f32 {
    chain
        .windows(2)
        .map(|w| {
            let (r1, r2) = (w[0].r, w[1].r);
            let h = w[0].distance_to(&w[1]);
            PI * (r1 + r2) * (h * h + (r1 - r2) * (r1 - r2)).sqrt()
        })
        .sum()
}

/// Total frustum volume: `π h (r1² + r1 r2 + r2²) / 3` per pair
pub fn volume(chain: &[Node]) -> f32 {
    chain
        .windows(2)
        .map(|w| {
            let (r1, r2) = (w[0].r, w[1].r);
            let h = w[0].distance_to(&w[1]);
            PI * h * (r1 * r1 + r1 * r2 + r2 * r2) / 3.0
        })
        .sum()
}

/// Path length over endpoint distance.
///
/// A single node has tortuosity exactly 1.0.
///
/// # Errors
/// `EmptyChain` for no nodes, `DegenerateTortuosity` when the endpoints coincide.
pub fn tortuosity(chain: &[Node]) -> SegmentResult<f32> {
    match chain {
        [] => Err(SegmentError::EmptyChain),
        [_] => Ok(1.0),
        [first, .., last] => {
            let euclidean = first.distance_to(last);
            if euclidean == 0.0 {
                return Err(SegmentError::DegenerateTortuosity);
            }
            Ok(path_length(chain) / euclidean)
        }
    }
}

/// Spine-shape feature: `max(tail radii) / mean(head radii)`.
///
/// The chain is cut at its middle node, which belongs to both halves
/// (for 5 nodes: head = 0..=2, tail = 2..=4).
pub fn tail_head_radius_ratio(chain: &[Node]) -> SegmentResult<f32> {
    if chain.is_empty() {
        return Err(SegmentError::EmptyChain);
    }
    let mid = (chain.len() + 1) / 2 - 1;
    let radii = radius_list(chain);
    let head = &radii[..=mid];
    let tail = &radii[mid..];

    let tail_max = tail.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    Ok(tail_max / mean(head))
}

/// Componentwise mean of all four fields over `range`
pub fn center(chain: &[Node], range: Range<usize>) -> SegmentResult<Node> {
    if range.start >= range.end || range.end > chain.len() {
        return Err(SegmentError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len: chain.len(),
        });
    }
    let nodes = &chain[range];
    let n = nodes.len() as f32;
    let sum = nodes.iter().fold([0.0f32; 4], |acc, node| {
        [acc[0] + node.x, acc[1] + node.y, acc[2] + node.z, acc[3] + node.r]
    });
    Ok(Node::new(sum[0] / n, sum[1] / n, sum[2] / n, sum[3] / n))
}

/// Closest node to `point` as `(distance, index)`.
///
/// `point` is `[x, y, z]` or `[x, y, z, r]`; a trailing radius is ignored.
/// Ties resolve to the lowest index.
pub fn nearest_point(chain: &[Node], point: &[f32]) -> SegmentResult<(f32, usize)> {
    let target = point_position(point)?;
    let mut best: Option<(f32, usize)> = None;
    for (index, node) in chain.iter().enumerate() {
        let d = distance_3d(node.position(), target);
        if best.map_or(true, |(min, _)| d < min) {
            best = Some((d, index));
        }
    }
    best.ok_or(SegmentError::EmptyChain)
}

/// Distance from `point` to the bounding box of the chain
pub fn bounding_box_distance(chain: &[Node], point: &[f32]) -> SegmentResult<f32> {
    let target = point_position(point)?;
    let bbox = BoundingBox::from_nodes(chain).ok_or(SegmentError::EmptyChain)?;
    Ok(bbox.distance_from(target))
}

fn point_position(point: &[f32]) -> SegmentResult<[f32; 3]> {
    match point {
        [x, y, z] | [x, y, z, _] => Ok([*x, *y, *z]),
        _ => Err(SegmentError::InvalidPoint(point.len())),
    }
}

pub(crate) fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Sample standard deviation (n - 1); 0.0 for fewer than two values
pub(crate) fn sample_std(values: &[f32]) -> f32 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / (values.len() - 1) as f32;
    var.sqrt()
}
