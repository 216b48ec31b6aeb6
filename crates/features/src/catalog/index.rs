//! Constant-time reverse lookups from bit index to catalog entry.

use super::descriptor::{CATALOG, Feature};
use crate::level::SupportLevel;

const fn highest_mandatory_bit() -> u32 {
    let mut highest = 0;
    let mut i = 0;
    while i < CATALOG.len() {
        if CATALOG[i].mandatory_bit() > highest {
            highest = CATALOG[i].mandatory_bit();
        }
        i += 1;
    }
    highest
}

/// One slot per bit pair; slot `n` covers bits `2n` and `2n + 1`.
const PAIR_SLOTS: usize = highest_mandatory_bit() as usize / 2 + 1;

const fn build_pair_index() -> [Option<Feature>; PAIR_SLOTS] {
    let mut index = [None; PAIR_SLOTS];
    let mut i = 0;
    while i < CATALOG.len() {
        let entry = &CATALOG[i];
        assert!(
            entry.feature() as usize == i,
            "feature catalog entries must follow enum declaration order"
        );
        assert!(
            entry.mandatory_bit().is_multiple_of(2),
            "feature catalog mandatory bits must be even"
        );
        let slot = entry.mandatory_bit() as usize / 2;
        assert!(
            index[slot].is_none(),
            "feature catalog contains a duplicate mandatory bit"
        );
        index[slot] = Some(entry.feature());
        i += 1;
    }
    index
}

/// Evaluated at compile time; catalog defects abort the build.
const PAIR_INDEX: [Option<Feature>; PAIR_SLOTS] = build_pair_index();

const _: () = assert!(Feature::ALL.len() == CATALOG.len());

impl Feature {
    /// Returns the feature whose mandatory bit is `bit`.
    #[must_use]
    pub const fn from_mandatory_bit(bit: u32) -> Option<Self> {
        if !bit.is_multiple_of(2) {
            return None;
        }
        Self::from_pair_slot(bit / 2)
    }

    /// Returns the feature whose optional bit is `bit`.
    #[must_use]
    pub const fn from_optional_bit(bit: u32) -> Option<Self> {
        if bit.is_multiple_of(2) {
            return None;
        }
        Self::from_pair_slot(bit / 2)
    }

    /// Resolves any bit index to the feature owning it and the level it signals.
    #[must_use]
    pub const fn from_bit(bit: u32) -> Option<(Self, SupportLevel)> {
        match Self::from_pair_slot(bit / 2) {
            Some(feature) => Some((feature, SupportLevel::for_bit(bit))),
            None => None,
        }
    }

    /// Returns `true` when `bit` belongs to a catalog entry at either level.
    #[must_use]
    pub const fn is_catalog_bit(bit: u32) -> bool {
        Self::from_pair_slot(bit / 2).is_some()
    }

    const fn from_pair_slot(slot: u32) -> Option<Self> {
        let slot = slot as usize;
        if slot < PAIR_SLOTS {
            PAIR_INDEX[slot]
        } else {
            None
        }
    }
}
