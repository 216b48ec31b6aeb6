//! # Overview
//!
//! Predicates deciding whether two peers may interoperate, following the
//! BOLT9 rule that odd bits are safe to ignore while even bits must be
//! understood.
//!
//! [`is_supported_by`] is directional: it checks what the *sender* demands
//! against what the *receiver* offers and never inspects the receiver's
//! unknown bits. [`are_compatible`] applies it in both directions.
//! [`can_use_feature`] gates optional behaviour on an established connection.
//!
//! # Examples
//!
//! ```
//! use features::{Feature, FeatureSet, SupportLevel, UnknownBit, are_compatible, is_supported_by};
//!
//! let local = FeatureSet::empty().with_feature(Feature::StaticRemoteKey, SupportLevel::Optional);
//! let remote = FeatureSet::empty()
//!     .with_feature(Feature::StaticRemoteKey, SupportLevel::Mandatory)
//!     .with_unknown_bit(UnknownBit::new(101).unwrap());
//!
//! assert!(is_supported_by(&local, &remote));
//! assert!(are_compatible(&local, &remote));
//! ```

use std::fmt;

use logging::trace_compat;

use crate::catalog::Feature;
use crate::level::SupportLevel;
use crate::set::{FeatureSet, UnknownBit};

/// A sender requirement the receiver does not satisfy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MissingRequirement {
    /// The sender requires a catalog feature the receiver does not activate.
    Feature(Feature),
    /// The sender set an even bit outside the receiver's catalog.
    UnknownMandatoryBit(UnknownBit),
}

impl fmt::Display for MissingRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature(feature) => write!(f, "mandatory feature {feature} is not activated"),
            Self::UnknownMandatoryBit(bit) => {
                write!(f, "unknown mandatory bit {} is not understood", bit.index())
            }
        }
    }
}

/// Lists every requirement of `sender` that `receiver` fails to meet.
///
/// Known features come first in bit order, followed by even unknown bits.
#[must_use]
pub fn missing_requirements(receiver: &FeatureSet, sender: &FeatureSet) -> Vec<MissingRequirement> {
    let features = sender
        .iter()
        .filter(|(feature, level)| {
            *level == SupportLevel::Mandatory && !receiver.has_feature(*feature, None)
        })
        .map(|(feature, _)| MissingRequirement::Feature(feature));

    let unknown = sender
        .unknown()
        .iter()
        .filter(|bit| bit.is_even())
        .map(|bit| MissingRequirement::UnknownMandatoryBit(*bit));

    features.chain(unknown).collect()
}

/// Returns `true` when `receiver` satisfies every requirement `sender` signals.
///
/// Sender-mandatory features must be activated by the receiver at either
/// level, and every unknown bit the sender sets must be odd.
#[must_use]
pub fn is_supported_by(receiver: &FeatureSet, sender: &FeatureSet) -> bool {
    let missing = missing_requirements(receiver, sender);
    for requirement in &missing {
        trace_compat!(%requirement, "peer requirement not supported");
    }
    missing.is_empty()
}

/// Returns `true` when each side supports the other's requirements.
#[must_use]
pub fn are_compatible(a: &FeatureSet, b: &FeatureSet) -> bool {
    let compatible = is_supported_by(a, b) && is_supported_by(b, a);
    if !compatible {
        trace_compat!(local = %a, remote = %b, "feature sets are incompatible");
    }
    compatible
}

/// Returns `true` when both sides activate `feature`, at any level.
#[must_use]
pub fn can_use_feature(local: &FeatureSet, remote: &FeatureSet, feature: Feature) -> bool {
    local.has_feature(feature, None) && remote.has_feature(feature, None)
}
