// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sparse node-index → synapse association
//!
//! A slot map has a fixed domain `0..len` (the node count of the owning
//! segment) and holds at most one synapse per index. Collisions are resolved by
//! probing nearby slots (`-1, +1, -2, +2, ...`) up to a fixed radius; nothing
//! is ever overwritten or pushed further out.

use std::collections::BTreeMap;
use std::ops::Range;

/// Result of an attachment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// Stored at `slot` (equal to the requested index unless a probe was needed)
    Attached { slot: usize },
    /// The requested slot already holds an equal synapse; nothing changed
    Duplicate,
    /// No free slot inside the probe window; nothing changed
    Dropped,
}

impl AttachOutcome {
    pub fn is_attached(&self) -> bool {
        matches!(self, AttachOutcome::Attached { .. })
    }
}

/// Probe order for a collision at `index`: the index itself, then
/// `index - 1, index + 1, ..., index - radius, index + radius`, restricted to `0..len`
pub fn probe_sequence(index: usize, radius: usize, len: usize) -> impl Iterator<Item = usize> {
    let offsets = std::iter::once(0i64)
        .chain((1..=radius as i64).flat_map(|d| [-d, d]));
    offsets.filter_map(move |offset| {
        let candidate = index as i64 + offset;
        (candidate >= 0 && (candidate as u64) < len as u64).then_some(candidate as usize)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynapseSlotMap<S> {
    len: usize,
    slots: BTreeMap<usize, S>,
}

impl<S> Default for SynapseSlotMap<S> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S> SynapseSlotMap<S> {
    /// Empty map over the domain `0..len`
    pub fn new(len: usize) -> Self {
        Self {
            len,
            slots: BTreeMap::new(),
        }
    }

    /// Domain size (node count of the owning chain)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.slots.get(&index)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// Occupied slots in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &S)> {
        self.slots.iter().map(|(&i, s)| (i, s))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.keys().copied()
    }

    /// Place `synapse` at `index` or the nearest free slot within `probe_radius`.
    ///
    /// Only the requested slot is checked for an equal synapse; probing never
    /// displaces an existing entry. An `index` outside `0..len` is dropped
    /// without probing.
    pub fn attach(&mut self, index: usize, synapse: S, probe_radius: usize) -> AttachOutcome
    where
        S: PartialEq,
    {
        if index >= self.len {
            return AttachOutcome::Dropped;
        }
        if let Some(existing) = self.slots.get(&index) {
            if *existing == synapse {
                return AttachOutcome::Duplicate;
            }
        }

        let free = probe_sequence(index, probe_radius, self.len)
            .find(|i| !self.slots.contains_key(i));
        match free {
            Some(slot) => {
                self.slots.insert(slot, synapse);
                AttachOutcome::Attached { slot }
            }
            None => AttachOutcome::Dropped,
        }
    }

    /// Map with `range` cut out of the domain.
    ///
    /// Indices before the range keep their position, indices after it shift
    /// down by `range.len()`, and indices inside it are dropped.
    pub fn without_range(&self, range: Range<usize>) -> Self
    where
        S: Clone,
    {
        let removed = range.end.saturating_sub(range.start);
        let slots = self
            .slots
            .iter()
            .filter_map(|(&i, s)| {
                if i < range.start {
                    Some((i, s.clone()))
                } else if i >= range.end {
                    Some((i - removed, s.clone()))
                } else {
                    None
                }
            })
            .collect();
        Self {
            len: self.len.saturating_sub(removed),
            slots,
        }
    }

    /// Map restricted to `range`, re-based so `range.start` becomes index 0
    pub fn slice(&self, range: Range<usize>) -> Self
    where
        S: Clone,
    {
        if range.start >= range.end {
            return Self::new(0);
        }
        let slots = self
            .slots
            .range(range.clone())
            .map(|(&i, s)| (i - range.start, s.clone()))
            .collect();
        Self {
            len: range.end.saturating_sub(range.start),
            slots,
        }
    }

    /// Append `other`'s domain after this one, shifting its indices by `self.len()`
    pub fn concat(&self, other: &Self) -> Self
    where
        S: Clone,
    {
        let mut slots = self.slots.clone();
        slots.extend(other.slots.iter().map(|(&i, s)| (i + self.len, s.clone())));
        Self {
            len: self.len + other.len,
            slots,
        }
    }

    /// Shrink the domain to `len`, dropping entries beyond it. Returns the dropped count.
    pub fn truncate(&mut self, len: usize) -> usize {
        let dropped = self.slots.split_off(&len).len();
        self.len = self.len.min(len);
        dropped
    }

    /// Move every entry out, leaving an empty map over a new domain
    pub(crate) fn drain_into_domain(&mut self, len: usize) -> BTreeMap<usize, S> {
        self.len = len;
        std::mem::take(&mut self.slots)
    }
}
