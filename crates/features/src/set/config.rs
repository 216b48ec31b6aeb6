//! Textual form of a [`FeatureSet`] used in node configuration.
//!
//! Entries are separated by commas or whitespace:
//!
//! - `name=mandatory` or `name=optional` activates a catalog feature;
//! - a bare `name` activates it as optional;
//! - `unknown=<bit>` carries a bit outside the catalog;
//! - the single word `none` denotes the empty set.
//!
//! [`Display`](fmt::Display) renders the same grammar, so rendered sets parse
//! back to equal values.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use logging::trace_config;

use super::{FeatureSet, UnknownBit};
use crate::catalog::Feature;
use crate::error::ParseFeatureSetError;
use crate::level::SupportLevel;

const UNKNOWN_KEY: &str = "unknown";
const EMPTY_MARKER: &str = "none";

impl FromStr for FeatureSet {
    type Err = ParseFeatureSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == EMPTY_MARKER {
            return Ok(Self::empty());
        }

        let mut activated = BTreeMap::new();
        let mut unknown = BTreeSet::new();

        let entries = s
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|entry| !entry.is_empty());

        for entry in entries {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (entry, None),
            };

            if key == UNKNOWN_KEY {
                let raw = value.unwrap_or_default();
                let bit = raw
                    .parse::<u32>()
                    .map_err(|_| ParseFeatureSetError::InvalidBitIndex(raw.to_owned()))?;
                unknown.insert(UnknownBit::new(bit)?);
                continue;
            }

            let feature = key.parse::<Feature>()?;
            let level = match value {
                Some(value) => value.parse::<SupportLevel>()?,
                None => SupportLevel::Optional,
            };
            if activated.insert(feature, level).is_some() {
                return Err(ParseFeatureSetError::DuplicateFeature(feature));
            }
        }

        trace_config!(
            activated = activated.len(),
            unknown = unknown.len(),
            "parsed feature configuration"
        );

        Ok(Self { activated, unknown })
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_MARKER);
        }

        let mut first = true;
        for (feature, level) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{feature}={level}")?;
        }

        for bit in &self.unknown {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{UNKNOWN_KEY}={}", bit.index())?;
        }

        Ok(())
    }
}
