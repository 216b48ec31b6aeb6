//! # Overview
//!
//! Wire form of a [`FeatureSet`]. Bit `i` lives in byte `len - 1 - i / 8`
//! under mask `1 << (i % 8)`, so bit 0 is the least-significant bit of the
//! *last* byte. The encoder emits the minimal number of bytes covering the
//! highest flagged bit; the empty set encodes to no bytes at all.
//!
//! Decoding is total. Every set bit resolves to exactly one of: a catalog
//! feature at [`SupportLevel::Optional`] (odd bit), a catalog feature at
//! [`SupportLevel::Mandatory`] (even bit), or an [`UnknownBit`]. Leading zero
//! bytes are accepted and dropped on re-encode.
//!
//! # Examples
//!
//! ```
//! use features::{Feature, FeatureSet, SupportLevel};
//!
//! let set = FeatureSet::empty().with_feature(Feature::VariableLengthOnion, SupportLevel::Mandatory);
//! assert_eq!(set.encode(), vec![0x01, 0x00]);
//! assert_eq!(FeatureSet::decode(&[0x01, 0x00]), set);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use logging::{trace_codec, warn_codec};

use crate::catalog::Feature;
use crate::level::SupportLevel;
use crate::set::{FeatureSet, UnknownBit};

impl FeatureSet {
    /// Returns the number of bytes [`encode`](Self::encode) produces.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.highest_set_bit()
            .map_or(0, |highest| highest as usize / 8 + 1)
    }

    /// Encodes the set into its minimal wire form.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_to_vec(&mut out);
        out
    }

    /// Appends the wire form of the set to `out`.
    pub fn encode_to_vec(&self, out: &mut Vec<u8>) {
        let len = self.encoded_len();
        if len == 0 {
            return;
        }

        let start = out.len();
        out.resize(start + len, 0);
        let bitmap = &mut out[start..];
        for bit in self.set_bits() {
            let byte = len - 1 - bit as usize / 8;
            bitmap[byte] |= 1 << (bit % 8);
        }

        trace_codec!(bytes = len, "encoded feature bitmap");
    }

    /// Decodes a wire bitmap. Never fails; unrecognised bits are preserved.
    ///
    /// When both bits of one feature are set the feature is recorded as
    /// mandatory.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Self {
        let mut activated = BTreeMap::new();
        let mut unknown = BTreeSet::new();

        for (offset, &byte) in bytes.iter().rev().enumerate() {
            if byte == 0 {
                continue;
            }

            let Some(base) = offset
                .checked_mul(8)
                .and_then(|base| u32::try_from(base).ok())
                .filter(|base| base.checked_add(7).is_some())
            else {
                warn_codec!(
                    bytes = bytes.len(),
                    skipped = bytes.len() - offset,
                    "feature bitmap exceeds addressable bit range"
                );
                break;
            };

            for shift in 0..8 {
                if byte & (1 << shift) == 0 {
                    continue;
                }
                let bit = base + shift;
                match Feature::from_bit(bit) {
                    Some((feature, SupportLevel::Mandatory)) => {
                        activated.insert(feature, SupportLevel::Mandatory);
                    }
                    Some((feature, SupportLevel::Optional)) => {
                        activated.entry(feature).or_insert(SupportLevel::Optional);
                    }
                    None => {
                        unknown.insert(UnknownBit::new_unchecked(bit));
                    }
                }
            }
        }

        if !unknown.is_empty() {
            let bits: Vec<u32> = unknown.iter().map(|bit: &UnknownBit| bit.index()).collect();
            trace_codec!(?bits, "feature bitmap carries unknown bits");
        }
        trace_codec!(
            bytes = bytes.len(),
            activated = activated.len(),
            unknown = unknown.len(),
            "decoded feature bitmap"
        );

        Self::new(activated, unknown)
    }
}
