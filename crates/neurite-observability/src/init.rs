// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs a console `tracing` subscriber whose filter combines the configured
//! base level with the per-crate debug flags.

use anyhow::{anyhow, Context, Result};
use neurite_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Build the filter used by [`init_logging`]
pub fn build_env_filter(
    debug_flags: &CrateDebugFlags,
    logging: &LoggingConfig,
) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(&logging.level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter directives: {}", directives))
}

/// Initialize console logging
///
/// # Errors
///
/// Fails if the level is not a valid filter directive, or if a global
/// subscriber is already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, logging: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(debug_flags, logging)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    match logging.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
