// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Ensures heuristic parameters are within usable ranges before they reach
//! segment processing.

use crate::{ConfigError, ConfigResult, NeuriteConfig};

/// Largest accepted probe radius
pub const MAX_PROBE_RADIUS: usize = 16;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    OutOfRange { field: String, reason: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { field, reason } => {
                write!(f, "Configuration value {} out of range: {}", field, reason)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &NeuriteConfig) -> ConfigResult<()> {
    let errors = collect_validation_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

/// Run every check and return the individual failures
pub fn collect_validation_errors(config: &NeuriteConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    let segment = &config.segment;

    if segment.probe_radius > MAX_PROBE_RADIUS {
        errors.push(ConfigValidationError::OutOfRange {
            field: "segment.probe_radius".to_string(),
            reason: format!("{} exceeds {}", segment.probe_radius, MAX_PROBE_RADIUS),
        });
    }

    if !segment.long_orphan_path_length.is_finite() || segment.long_orphan_path_length <= 0.0 {
        errors.push(ConfigValidationError::OutOfRange {
            field: "segment.long_orphan_path_length".to_string(),
            reason: format!("{} must be positive and finite", segment.long_orphan_path_length),
        });
    }

    if !segment.density_scale.is_finite() || segment.density_scale <= 0.0 {
        errors.push(ConfigValidationError::OutOfRange {
            field: "segment.density_scale".to_string(),
            reason: format!("{} must be positive and finite", segment.density_scale),
        });
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        });
    }

    errors
}
