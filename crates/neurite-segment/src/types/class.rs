// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Morphological class of a segment

use core::fmt;
use serde::{Deserialize, Serialize};

/// Morphological role tag.
///
/// `Axon` and `Dendrite` are derived by the classifier from `Undefined`;
/// `Soma` is only ever assigned externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Class {
    #[default]
    Undefined,
    Axon,
    Dendrite,
    Soma,
}

impl Class {
    /// SWC structure type code
    pub fn swc_code(self) -> u8 {
        match self {
            Class::Undefined => 0,
            Class::Soma => 1,
            Class::Axon => 2,
            Class::Dendrite => 3,
        }
    }

    /// Inverse of [`Class::swc_code`]. Unknown codes (including apical
    /// dendrite and custom types) map to `Undefined`.
    pub fn from_swc_code(code: u8) -> Self {
        match code {
            1 => Class::Soma,
            2 => Class::Axon,
            3 => Class::Dendrite,
            _ => Class::Undefined,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Class::Undefined => "undefined",
            Class::Axon => "axon",
            Class::Dendrite => "dendrite",
            Class::Soma => "soma",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swc_codes() {
        for class in [Class::Undefined, Class::Axon, Class::Dendrite, Class::Soma] {
            assert_eq!(Class::from_swc_code(class.swc_code()), class);
        }
        assert_eq!(Class::from_swc_code(4), Class::Undefined);
    }
}
