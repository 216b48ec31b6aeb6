use std::fmt;

use crate::catalog::Feature;
use crate::error::InvalidUnknownBit;

/// A set bit whose index matches no catalog entry.
///
/// Unknown bits are kept so that bitmaps from peers with a newer catalog
/// survive a decode/encode round trip. Catalog bits cannot be wrapped, which
/// keeps a [`FeatureSet`](crate::FeatureSet) from holding the same index both
/// as a feature and as an unknown bit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u32", try_from = "u32")
)]
pub struct UnknownBit(u32);

impl UnknownBit {
    /// Wraps `bit`, rejecting indices owned by a catalog feature.
    pub const fn new(bit: u32) -> Result<Self, InvalidUnknownBit> {
        match Feature::from_bit(bit) {
            Some((feature, _)) => Err(InvalidUnknownBit::new(bit, feature)),
            None => Ok(Self(bit)),
        }
    }

    /// Callers must have checked the bit against the catalog.
    pub(crate) const fn new_unchecked(bit: u32) -> Self {
        debug_assert!(!Feature::is_catalog_bit(bit));
        Self(bit)
    }

    /// Returns the bit index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Even unknown bits are mandatory requirements nobody here understands.
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0.is_multiple_of(2)
    }
}

impl TryFrom<u32> for UnknownBit {
    type Error = InvalidUnknownBit;

    fn try_from(bit: u32) -> Result<Self, Self::Error> {
        Self::new(bit)
    }
}

impl From<UnknownBit> for u32 {
    fn from(bit: UnknownBit) -> Self {
        bit.0
    }
}

impl fmt::Display for UnknownBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown({})", self.0)
    }
}
