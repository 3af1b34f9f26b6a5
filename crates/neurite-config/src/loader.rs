// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, NeuriteConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "neurite_configuration.toml";

/// Find the neurite configuration file
///
/// Search order:
/// 1. `NEURITE_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("NEURITE_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by NEURITE_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\n\
         Set NEURITE_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML.
/// Validation is left to [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<NeuriteConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: NeuriteConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `NEURITE_LOG_LEVEL` -> `logging.level`
/// - `NEURITE_PROBE_RADIUS` -> `segment.probe_radius`
/// - `NEURITE_LONG_ORPHAN_PATH_LENGTH` -> `segment.long_orphan_path_length`
/// - `NEURITE_DENSITY_SCALE` -> `segment.density_scale`
///
/// Values that fail to parse are ignored.
pub fn apply_environment_overrides(config: &mut NeuriteConfig) {
    if let Ok(value) = env::var("NEURITE_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("NEURITE_PROBE_RADIUS") {
        if let Ok(radius) = value.parse::<usize>() {
            config.segment.probe_radius = radius;
        }
    }
    if let Ok(value) = env::var("NEURITE_LONG_ORPHAN_PATH_LENGTH") {
        if let Ok(length) = value.parse::<f32>() {
            config.segment.long_orphan_path_length = length;
        }
    }
    if let Ok(value) = env::var("NEURITE_DENSITY_SCALE") {
        if let Ok(scale) = value.parse::<f32>() {
            config.segment.density_scale = scale;
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"probe_radius": "2", "log_level": "debug"}`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a recognized key holds a value that
/// does not parse. Unlike environment variables, explicit arguments are never
/// ignored silently.
pub fn apply_cli_overrides(
    config: &mut NeuriteConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("probe_radius") {
        config.segment.probe_radius = parse_override("probe_radius", value)?;
    }
    if let Some(value) = cli_args.get("long_orphan_path_length") {
        config.segment.long_orphan_path_length = parse_override("long_orphan_path_length", value)?;
    }
    if let Some(value) = cli_args.get("density_scale") {
        config.segment.density_scale = parse_override("density_scale", value)?;
    }
    if let Some(value) = cli_args.get("reindex_on_dedupe") {
        config.segment.reindex_on_dedupe = match value.to_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => {
                return Err(ConfigError::InvalidValue(format!(
                    "reindex_on_dedupe = '{}' (expected true, false, 1 or 0)",
                    value
                )))
            }
        };
    }
    Ok(())
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue(format!("{} = '{}'", key, value)))
}
