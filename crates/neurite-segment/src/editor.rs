// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Structural edits that produce new segments.

All of these take `&self` and leave the source untouched. Synapse slot maps
follow the nodes they were attached to: entries before an edit point keep
their index, entries after it shift, entries on removed nodes are dropped.
*/

use core::ops::Range;

use tracing::debug;

use crate::segment::Segment;
use crate::synapse::SynapseKind::{Post, Pre};
use crate::types::{SegmentError, SegmentResult};

impl<S: Clone> Segment<S> {
    /// Copy shifted by `(dx, dy, dz)`; radii, class and attachments unchanged
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> Segment<S> {
        let nodes = self.nodes().iter().map(|n| n.translated(dx, dy, dz)).collect();
        Segment::assemble(
            nodes,
            self.class(),
            self.slot_map(Pre).clone(),
            self.slot_map(Post).clone(),
        )
    }

    /// Copy with the nodes in `range` deleted.
    ///
    /// Returns the canonical empty segment if nothing is left.
    ///
    /// # Errors
    /// `RangeOutOfBounds` unless `range.start <= range.end <= len`.
    pub fn remove_nodes(&self, range: Range<usize>) -> SegmentResult<Segment<S>> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(SegmentError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        if range.end - range.start == len {
            return Ok(Segment::empty());
        }

        let mut nodes = Vec::with_capacity(len - (range.end - range.start));
        nodes.extend_from_slice(&self.nodes()[..range.start]);
        nodes.extend_from_slice(&self.nodes()[range.end..]);

        debug!(
            target: "neurite-segment",
            "Removed nodes {}..{} ({} -> {} nodes)",
            range.start, range.end, len, nodes.len()
        );

        Ok(Segment::assemble(
            nodes,
            self.class(),
            self.slot_map(Pre).without_range(range.clone()),
            self.slot_map(Post).without_range(range),
        ))
    }

    /// Split into two non-empty segments at `index`.
    ///
    /// The second half starts at `index`, except that `index == 0` keeps node 0
    /// as a one-node first half. A one-node segment splits into two copies of
    /// that node, with the attachments kept on the first copy only. Both halves
    /// inherit the class.
    ///
    /// # Errors
    /// `SplitIndexOutOfRange` unless `index < len`.
    pub fn split(&self, index: usize) -> SegmentResult<(Segment<S>, Segment<S>)> {
        let len = self.len();
        if index >= len {
            return Err(SegmentError::SplitIndexOutOfRange { index, len });
        }

        if len == 1 {
            let first = self.clone();
            let second = Segment::with_class(self.nodes().to_vec(), self.class());
            return Ok((first, second));
        }

        let cut = index.max(1);
        let (head, tail) = self.nodes().split_at(cut);
        if head.is_empty() || tail.is_empty() {
            return Err(SegmentError::EmptySplitHalf);
        }

        let (pre, post) = (self.slot_map(Pre), self.slot_map(Post));
        let first = Segment::assemble(
            head.to_vec(),
            self.class(),
            pre.slice(0..cut),
            post.slice(0..cut),
        );
        let second = Segment::assemble(
            tail.to_vec(),
            self.class(),
            pre.slice(cut..len),
            post.slice(cut..len),
        );

        debug!(
            target: "neurite-segment",
            "Split {} nodes at {} into {} + {}",
            len, index, first.len(), second.len()
        );
        Ok((first, second))
    }

    /// Concatenate `self` then `other`.
    ///
    /// The class comes from whichever input has strictly more nodes (ties go to
    /// `self`); `other`'s attachments shift by `self.len()`.
    pub fn merge(&self, other: &Segment<S>) -> Segment<S> {
        let class = if other.len() > self.len() {
            other.class()
        } else {
            self.class()
        };

        let mut nodes = Vec::with_capacity(self.len() + other.len());
        nodes.extend_from_slice(self.nodes());
        nodes.extend_from_slice(other.nodes());

        let pre = self.slot_map(Pre).concat(other.slot_map(Pre));
        let post = self.slot_map(Post).concat(other.slot_map(Post));

        Segment::assemble(nodes, class, pre, post)
    }
}
