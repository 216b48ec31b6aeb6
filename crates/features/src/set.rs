//! # Overview
//!
//! [`FeatureSet`] is the value exchanged with peers: the catalog features a
//! node activates, each at a [`SupportLevel`], plus any set bits the catalog
//! does not recognise. Values are immutable; every operation that changes
//! membership returns a new set.
//!
//! # Invariants
//!
//! - Each feature is activated at most once.
//! - No bit index is both the bit of an activated feature and an
//!   [`UnknownBit`]; [`UnknownBit::new`] refuses catalog bits.
//!
//! # Examples
//!
//! ```
//! use features::{Feature, FeatureSet, SupportLevel};
//!
//! let local = FeatureSet::empty()
//!     .with_feature(Feature::VariableLengthOnion, SupportLevel::Mandatory)
//!     .with_feature(Feature::StaticRemoteKey, SupportLevel::Optional);
//!
//! assert!(local.has_feature(Feature::VariableLengthOnion, None));
//! assert!(!local.has_feature(Feature::StaticRemoteKey, Some(SupportLevel::Mandatory)));
//! assert_eq!(local.invoice_view().len(), 1);
//! ```

mod config;
mod unknown;

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Feature;
use crate::level::SupportLevel;
use crate::scope::Scope;

pub use unknown::UnknownBit;

/// Activated catalog features plus unrecognised bits.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet {
    activated: BTreeMap<Feature, SupportLevel>,
    #[cfg_attr(feature = "serde", serde(default))]
    unknown: BTreeSet<UnknownBit>,
}

impl FeatureSet {
    /// Builds a set from activated features and unknown bits.
    ///
    /// A feature listed twice keeps its last level.
    pub fn new<A, U>(activated: A, unknown: U) -> Self
    where
        A: IntoIterator<Item = (Feature, SupportLevel)>,
        U: IntoIterator<Item = UnknownBit>,
    {
        Self {
            activated: activated.into_iter().collect(),
            unknown: unknown.into_iter().collect(),
        }
    }

    /// Returns a set with nothing activated and no unknown bits.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when nothing is activated and no unknown bits are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty() && self.unknown.is_empty()
    }

    /// Returns the activated features keyed in ascending bit order.
    #[must_use]
    pub const fn activated(&self) -> &BTreeMap<Feature, SupportLevel> {
        &self.activated
    }

    /// Returns the unrecognised bits in ascending order.
    #[must_use]
    pub const fn unknown(&self) -> &BTreeSet<UnknownBit> {
        &self.unknown
    }

    /// Returns the level `feature` is activated at, if any.
    #[must_use]
    pub fn support_level(&self, feature: Feature) -> Option<SupportLevel> {
        self.activated.get(&feature).copied()
    }

    /// Reports whether `feature` is activated.
    ///
    /// With `required` set, the activation level must match it exactly.
    #[must_use]
    pub fn has_feature(&self, feature: Feature, required: Option<SupportLevel>) -> bool {
        match (self.support_level(feature), required) {
            (Some(_), None) => true,
            (Some(level), Some(required)) => level == required,
            (None, _) => false,
        }
    }

    /// Iterates over activated features in ascending bit order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Feature, SupportLevel)> + '_ {
        self.activated.iter().map(|(feature, level)| (*feature, *level))
    }

    /// Iterates over every bit this set flags: activated support bits and
    /// unknown bits, in ascending order.
    pub fn set_bits(&self) -> impl Iterator<Item = u32> + '_ {
        let mut bits: Vec<u32> = self
            .iter()
            .map(|(feature, level)| feature.support_bit(level))
            .chain(self.unknown.iter().map(|bit| bit.index()))
            .collect();
        bits.sort_unstable();
        bits.into_iter()
    }

    /// Returns the highest flagged bit, or `None` for an empty set.
    #[must_use]
    pub fn highest_set_bit(&self) -> Option<u32> {
        let known = self
            .activated
            .iter()
            .map(|(feature, level)| feature.support_bit(*level))
            .max();
        let unknown = self.unknown.last().map(|bit| bit.index());
        known.max(unknown)
    }

    /// Returns a copy with `feature` activated at `level`, replacing any prior level.
    #[must_use]
    pub fn with_feature(&self, feature: Feature, level: SupportLevel) -> Self {
        let mut next = self.clone();
        next.activated.insert(feature, level);
        next
    }

    /// Returns a copy with `feature` deactivated.
    #[must_use]
    pub fn without_feature(&self, feature: Feature) -> Self {
        let mut next = self.clone();
        next.activated.remove(&feature);
        next
    }

    /// Returns a copy that also carries `bit`.
    #[must_use]
    pub fn with_unknown_bit(&self, bit: UnknownBit) -> Self {
        let mut next = self.clone();
        next.unknown.insert(bit);
        next
    }

    /// Keeps only features allowed in `scope`; unknown bits are carried over unchanged.
    #[must_use]
    pub fn filter_by_scope(&self, scope: Scope) -> Self {
        Self {
            activated: self.scoped_activations(scope),
            unknown: self.unknown.clone(),
        }
    }

    /// Features that may be sent in the `init` handshake.
    #[must_use]
    pub fn handshake_scoped(&self) -> Self {
        self.filter_by_scope(Scope::Handshake)
    }

    /// Features that may be gossiped in `node_announcement`.
    #[must_use]
    pub fn node_announcement_scoped(&self) -> Self {
        self.filter_by_scope(Scope::NodeAnnouncement)
    }

    /// Features that may be encoded in an invoice, unknown bits included.
    #[must_use]
    pub fn invoice_scoped(&self) -> Self {
        self.filter_by_scope(Scope::Invoice)
    }

    /// Invoice-scoped activations without unknown bits, which invoices do not carry.
    #[must_use]
    pub fn invoice_view(&self) -> BTreeMap<Feature, SupportLevel> {
        self.scoped_activations(Scope::Invoice)
    }

    fn scoped_activations(&self, scope: Scope) -> BTreeMap<Feature, SupportLevel> {
        self.activated
            .iter()
            .filter(|(feature, _)| feature.scopes().contains(scope))
            .map(|(feature, level)| (*feature, *level))
            .collect()
    }
}

impl FromIterator<(Feature, SupportLevel)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (Feature, SupportLevel)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<BTreeMap<_, _>>())
    }
}

impl From<BTreeMap<Feature, SupportLevel>> for FeatureSet {
    fn from(activated: BTreeMap<Feature, SupportLevel>) -> Self {
        Self {
            activated,
            unknown: BTreeSet::new(),
        }
    }
}
