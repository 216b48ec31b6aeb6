//! Protocol contexts a feature may legally appear in.
//!
//! BOLT9 restricts each feature to a subset of the messages that carry
//! feature bitmaps: the `init` handshake, `node_announcement` gossip and
//! BOLT11 invoices. [`ScopeSet`] is a small bitfield over [`Scope`] so catalog
//! entries can carry any combination without a type hierarchy.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitOr, BitOrAssign};

/// A single protocol context that carries a feature bitmap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scope {
    /// Features exchanged in the `init` message.
    Handshake,
    /// Features gossiped in `node_announcement`.
    NodeAnnouncement,
    /// Features encoded in payment invoices.
    Invoice,
}

impl Scope {
    /// Every scope in ascending bit order.
    pub const ALL: [Self; 3] = [Self::Handshake, Self::NodeAnnouncement, Self::Invoice];

    /// Returns the single-scope [`ScopeSet`].
    #[must_use]
    pub const fn as_set(self) -> ScopeSet {
        match self {
            Self::Handshake => ScopeSet::HANDSHAKE,
            Self::NodeAnnouncement => ScopeSet::NODE_ANNOUNCEMENT,
            Self::Invoice => ScopeSet::INVOICE,
        }
    }

    /// Returns the lowercase identifier of the scope.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Handshake => "handshake",
            Self::NodeAnnouncement => "node_announcement",
            Self::Invoice => "invoice",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Scope> for ScopeSet {
    fn from(scope: Scope) -> Self {
        scope.as_set()
    }
}

/// Bitfield of [`Scope`] values attached to a catalog entry.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ScopeSet {
    bits: u8,
}

impl ScopeSet {
    const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// No scopes.
    pub const EMPTY: Self = Self::new(0);
    /// The `init` handshake.
    pub const HANDSHAKE: Self = Self::new(1 << 0);
    /// `node_announcement` gossip.
    pub const NODE_ANNOUNCEMENT: Self = Self::new(1 << 1);
    /// Payment invoices.
    pub const INVOICE: Self = Self::new(1 << 2);
    /// Every scope.
    pub const ALL: Self = Self::new(
        Self::HANDSHAKE.bits | Self::NODE_ANNOUNCEMENT.bits | Self::INVOICE.bits,
    );

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Returns `true` when no scopes are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` when `scope` is a member of the set.
    #[must_use]
    pub const fn contains(self, scope: Scope) -> bool {
        let bit = scope.as_set().bits;
        self.bits & bit == bit
    }

    /// Returns a new set containing the members of both operands.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns a new set containing only the members common to both operands.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Iterates over member scopes in ascending order.
    #[must_use]
    pub fn iter(self) -> ScopeSetIter {
        ScopeSetIter { remaining: self.bits }
    }
}

impl BitOr for ScopeSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for ScopeSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Scope> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, scope| set | scope.as_set())
    }
}

impl IntoIterator for ScopeSet {
    type Item = Scope;
    type IntoIter = ScopeSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for scope in *self {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            fmt::Display::fmt(&scope, f)?;
        }
        Ok(())
    }
}

/// Iterator over the scopes in a [`ScopeSet`], lowest bit first.
#[derive(Clone, Debug)]
pub struct ScopeSetIter {
    remaining: u8,
}

impl Iterator for ScopeSetIter {
    type Item = Scope;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining != 0 {
            let bit_index = self.remaining.trailing_zeros() as usize;
            self.remaining &= self.remaining - 1;
            if let Some(scope) = Scope::ALL.get(bit_index) {
                return Some(*scope);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.remaining & ScopeSet::ALL.bits).count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScopeSetIter {}

impl FusedIterator for ScopeSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scopes_occupy_distinct_bits() {
        assert_eq!(ScopeSet::HANDSHAKE.bits(), 1);
        assert_eq!(ScopeSet::NODE_ANNOUNCEMENT.bits(), 1 << 1);
        assert_eq!(ScopeSet::INVOICE.bits(), 1 << 2);
        assert_eq!(ScopeSet::ALL.bits(), 0b111);
    }

    #[test]
    fn contains_tests_membership() {
        let scopes = ScopeSet::HANDSHAKE | ScopeSet::INVOICE;
        assert!(scopes.contains(Scope::Handshake));
        assert!(scopes.contains(Scope::Invoice));
        assert!(!scopes.contains(Scope::NodeAnnouncement));
        assert!(!ScopeSet::EMPTY.contains(Scope::Handshake));
    }

    #[test]
    fn iter_yields_scopes_in_order() {
        let scopes: ScopeSet = [Scope::Invoice, Scope::Handshake].into_iter().collect();
        let collected: Vec<_> = scopes.iter().collect();
        assert_eq!(collected, vec![Scope::Handshake, Scope::Invoice]);
        assert_eq!(scopes.iter().len(), 2);
    }

    #[test]
    fn display_joins_scope_names() {
        assert_eq!(ScopeSet::EMPTY.to_string(), "none");
        assert_eq!(
            ScopeSet::ALL.to_string(),
            "handshake | node_announcement | invoice"
        );
        assert_eq!(format!("{:?}", ScopeSet::INVOICE), "{Invoice}");
    }

    #[test]
    fn intersection_keeps_common_members() {
        let left = ScopeSet::HANDSHAKE | ScopeSet::NODE_ANNOUNCEMENT;
        let right = ScopeSet::NODE_ANNOUNCEMENT | ScopeSet::INVOICE;
        assert_eq!(left.intersection(right), ScopeSet::NODE_ANNOUNCEMENT);
    }
}
