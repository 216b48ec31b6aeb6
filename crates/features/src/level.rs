use std::fmt;
use std::str::FromStr;

use crate::error::ParseSupportLevelError;

/// How strongly a peer signals a feature.
///
/// A [`Mandatory`](Self::Mandatory) feature occupies the even bit of its pair
/// and must be understood by the counterpart; an [`Optional`](Self::Optional)
/// feature occupies the odd bit and may be ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SupportLevel {
    /// The counterpart must support the feature or reject the connection.
    Mandatory,
    /// The counterpart may ignore the feature.
    Optional,
}

impl SupportLevel {
    /// Both levels, mandatory first.
    pub const ALL: [Self; 2] = [Self::Mandatory, Self::Optional];

    /// Returns the lowercase identifier used in configuration text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
        }
    }

    /// Offset of this level's bit from the feature's mandatory bit.
    #[must_use]
    pub const fn bit_offset(self) -> u32 {
        match self {
            Self::Mandatory => 0,
            Self::Optional => 1,
        }
    }

    /// Returns the level signalled by a bit index of the given parity.
    #[must_use]
    pub const fn for_bit(bit: u32) -> Self {
        if bit.is_multiple_of(2) {
            Self::Mandatory
        } else {
            Self::Optional
        }
    }
}

impl FromStr for SupportLevel {
    type Err = ParseSupportLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandatory" => Ok(Self::Mandatory),
            "optional" => Ok(Self::Optional),
            _ => Err(ParseSupportLevelError::new(s)),
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
