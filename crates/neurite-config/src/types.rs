// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `neurite_configuration.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NeuriteConfig {
    pub segment: SegmentConfig,
    pub logging: LoggingConfig,
}

/// Segment heuristics
///
/// Defaults are the stock values used by segment post-processing; changing them
/// changes classification and attachment results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Half-width of the window searched for a free slot when a synapse
    /// collides with an occupied node (probes `-1, +1, -2, +2, ...`)
    pub probe_radius: usize,
    /// Orphan segments (no synapses) longer than this are classified as axon
    pub long_orphan_path_length: f32,
    /// Multiplier applied to synapses-per-unit-length densities
    pub density_scale: f32,
    /// Re-derive synapse slots when redundant nodes are collapsed
    pub reindex_on_dedupe: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            probe_radius: 3,
            long_orphan_path_length: 5000.0,
            density_scale: 1000.0,
            reindex_on_dedupe: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: NeuriteConfig = toml::from_str("[segment]\nprobe_radius = 5\n").unwrap();
        assert_eq!(config.segment.probe_radius, 5);
        assert_eq!(config.segment.long_orphan_path_length, 5000.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_log_format_lowercase() {
        let config: NeuriteConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        let json = serde_json::to_string(&config.logging).unwrap();
        assert!(json.contains("\"json\""));
    }
}
