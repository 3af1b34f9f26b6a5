// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Segment Types Module
//!
//! Value types shared by geometry, slot maps and the segment aggregate.

pub mod class;
pub mod error;
pub mod node;

pub use class::Class;
pub use error::{SegmentError, SegmentResult};
pub use node::{Node, NodeChain};
