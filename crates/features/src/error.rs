//! Error types produced when turning configuration text into feature values.
//!
//! Decoding, encoding and the compatibility predicates are infallible; only
//! the textual configuration surface and unknown-bit construction can fail.

use thiserror::Error;

use crate::catalog::Feature;

/// Error returned when a feature name does not match any catalog entry.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized feature name: {name}")]
pub struct ParseFeatureError {
    name: Box<str>,
}

impl ParseFeatureError {
    pub(crate) fn new(name: impl Into<Box<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned when a support level is neither `mandatory` nor `optional`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized support level {input:?}; expected \"mandatory\" or \"optional\"")]
pub struct ParseSupportLevelError {
    input: Box<str>,
}

impl ParseSupportLevelError {
    pub(crate) fn new(input: impl Into<Box<str>>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error returned when a catalog bit is used where an unknown bit was expected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("bit {bit} belongs to feature {feature} and cannot be stored as an unknown bit")]
pub struct InvalidUnknownBit {
    bit: u32,
    feature: Feature,
}

impl InvalidUnknownBit {
    pub(crate) const fn new(bit: u32, feature: Feature) -> Self {
        Self { bit, feature }
    }

    /// Returns the rejected bit index.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self.bit
    }

    /// Returns the catalog feature that owns the bit.
    #[must_use]
    pub const fn feature(self) -> Feature {
        self.feature
    }
}

/// Errors that can occur while parsing a feature set from configuration text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseFeatureSetError {
    /// An entry named a feature outside the catalog.
    #[error(transparent)]
    UnknownFeature(#[from] ParseFeatureError),
    /// An entry carried an unrecognized support level.
    #[error(transparent)]
    InvalidLevel(#[from] ParseSupportLevelError),
    /// An `unknown=` entry did not carry an unsigned bit index.
    #[error("invalid unknown bit index {0:?}")]
    InvalidBitIndex(String),
    /// An `unknown=` entry named a bit owned by a catalog feature.
    #[error(transparent)]
    InvalidUnknownBit(#[from] InvalidUnknownBit),
    /// The same feature appeared in more than one entry.
    #[error("feature {0} is listed more than once")]
    DuplicateFeature(Feature),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        assert_eq!(
            ParseFeatureError::new("option_teleport").to_string(),
            "unrecognized feature name: option_teleport"
        );
        assert_eq!(
            ParseSupportLevelError::new("maybe").to_string(),
            "unrecognized support level \"maybe\"; expected \"mandatory\" or \"optional\""
        );
        assert_eq!(
            InvalidUnknownBit::new(9, Feature::VariableLengthOnion).to_string(),
            "bit 9 belongs to feature var_onion_optin and cannot be stored as an unknown bit"
        );
        assert_eq!(
            ParseFeatureSetError::DuplicateFeature(Feature::BasicMultiPartPayment).to_string(),
            "feature basic_mpp is listed more than once"
        );
    }

    #[test]
    fn transparent_variants_forward_display() {
        let err: ParseFeatureSetError = ParseFeatureError::new("nope").into();
        assert_eq!(err.to_string(), "unrecognized feature name: nope");
    }
}
