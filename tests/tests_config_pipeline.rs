// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Configuration file -> validation -> segment processing.
*/

use std::collections::HashMap;
use std::io::Write;

use neurite::config::{LogFormat, MAX_PROBE_RADIUS};
use neurite::observability::build_env_filter;
use neurite::prelude::*;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn chain(len: usize) -> Vec<Node> {
    (0..len).map(|i| Node::new(i as f32, 0.0, 0.0, 0.5)).collect()
}

#[test]
fn test_narrow_probe_radius_drops_earlier() {
    let file = write_config(
        r#"
[segment]
probe_radius = 1

[logging]
level = "warn"
format = "json"
"#,
    );
    let config = load_config(Some(file.path()), None).unwrap();
    validate_config(&config).unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    let mut seg = Segment::new(chain(10));
    for i in 3..=5 {
        seg.attach_synapse_with(SynapseKind::Pre, i, SynapseId(i as u64), &config.segment);
    }
    // default radius would still reach node 2
    let outcome = seg.attach_synapse_with(SynapseKind::Pre, 4, SynapseId(100), &config.segment);
    assert_eq!(outcome, AttachOutcome::Dropped);

    let outcome = seg.attach_synapse(SynapseKind::Pre, 4, SynapseId(101));
    assert_eq!(outcome, AttachOutcome::Attached { slot: 2 });
}

#[test]
fn test_orphan_threshold_from_cli_override() {
    let file = write_config("[segment]\nlong_orphan_path_length = 100.0\n");
    let mut cli = HashMap::new();
    cli.insert("long_orphan_path_length".to_string(), "5.0".to_string());

    let config = load_config(Some(file.path()), Some(&cli)).unwrap();
    validate_config(&config).unwrap();
    assert_eq!(config.segment.long_orphan_path_length, 5.0);

    let mut seg: Segment = Segment::new(chain(10));
    assert_eq!(seg.adjust_class_with(&config.segment), Class::Axon);
}

#[test]
fn test_density_scale_applies() {
    let file = write_config("[segment]\ndensity_scale = 1.0\n");
    let config = load_config(Some(file.path()), None).unwrap();

    let mut seg = Segment::new(chain(5));
    seg.attach_post_synapse(0, SynapseId(1));
    seg.attach_post_synapse(4, SynapseId(2));

    assert_eq!(seg.synapse_density_with(SynapseKind::Post, &config.segment), 0.5);
    assert_eq!(seg.post_synapse_density(), 500.0);
}

#[test]
fn test_invalid_probe_radius_rejected() {
    let file = write_config(&format!("[segment]\nprobe_radius = {}\n", MAX_PROBE_RADIUS + 1));
    let config = load_config(Some(file.path()), None).unwrap();
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_debug_flags_produce_valid_filter() {
    let file = write_config("[logging]\nlevel = \"error\"\n");
    let config = load_config(Some(file.path()), None).unwrap();

    let flags = CrateDebugFlags::from_args(vec![
        "neurite".to_string(),
        "--debug-neurite-segment".to_string(),
    ]);
    assert!(flags.is_enabled("neurite-segment"));
    assert!(!flags.is_enabled("neurite-config"));
    assert!(build_env_filter(&flags, &config.logging).is_ok());
}
