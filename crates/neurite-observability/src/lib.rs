// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # neurite-observability
//!
//! Logging setup shared by the neurite crates, with per-crate debug flag support.
//!
//! Library crates only emit `tracing` events (targets are the crate names in
//! [`KNOWN_CRATES`]); installing a subscriber is left to the host process via
//! [`init_logging`].

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known neurite crate names (also the `tracing` targets they log under)
pub const KNOWN_CRATES: &[&str] = &["neurite-segment"];
