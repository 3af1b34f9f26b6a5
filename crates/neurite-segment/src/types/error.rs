// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for segment operations

/// Result type for segment operations
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Precondition violations raised by segment operations.
///
/// Every fallible operation validates its inputs before touching the segment,
/// so an `Err` never leaves a partially edited segment behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    #[error("Operation requires a non-empty node chain")]
    EmptyChain,

    #[error("Split index {index} out of range for chain of length {len}")]
    SplitIndexOutOfRange { index: usize, len: usize },

    #[error("Split would produce an empty half")]
    EmptySplitHalf,

    #[error("Tortuosity undefined: first and last nodes coincide")]
    DegenerateTortuosity,

    #[error("Range {start}..{end} out of bounds for chain of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Point must have 3 or 4 components, got {0}")]
    InvalidPoint(usize),

    #[error("Slot map domain {actual} does not match chain length {expected}")]
    SlotDomainMismatch { expected: usize, actual: usize },
}
