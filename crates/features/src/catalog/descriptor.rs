use std::fmt;
use std::str::FromStr;

use crate::error::ParseFeatureError;
use crate::level::SupportLevel;
use crate::scope::ScopeSet;

const H: ScopeSet = ScopeSet::HANDSHAKE;
const N: ScopeSet = ScopeSet::NODE_ANNOUNCEMENT;
const I: ScopeSet = ScopeSet::INVOICE;

/// Features defined by BOLT9 that this crate recognises.
///
/// Variants are declared in ascending bit order, so the derived [`Ord`]
/// matches wire order and collections keyed by `Feature` iterate lowest bit
/// first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
pub enum Feature {
    /// Requires or supports extra `channel_reestablish` fields (`option_data_loss_protect`).
    #[doc(alias = "option_data_loss_protect")]
    DataLossProtect,
    /// Sending node needs a complete routing information dump (`initial_routing_sync`).
    #[doc(alias = "initial_routing_sync")]
    InitialRoutingSync,
    /// More sophisticated gossip control (`gossip_queries`).
    #[doc(alias = "gossip_queries")]
    ChannelRangeQueries,
    /// Requires or supports variable-length routing onion payloads (`var_onion_optin`).
    #[doc(alias = "var_onion_optin")]
    VariableLengthOnion,
    /// Gossip queries can include additional information (`gossip_queries_ex`).
    #[doc(alias = "gossip_queries_ex")]
    ChannelRangeQueriesExtended,
    /// Static key for the remote output (`option_static_remotekey`).
    #[doc(alias = "option_static_remotekey")]
    StaticRemoteKey,
    /// Node supports the `payment_secret` field (`payment_secret`).
    #[doc(alias = "payment_secret")]
    PaymentSecret,
    /// Node can receive basic multi-part payments (`basic_mpp`).
    #[doc(alias = "basic_mpp")]
    BasicMultiPartPayment,
    /// Can create large channels (`option_support_large_channel`).
    #[doc(alias = "option_support_large_channel")]
    Wumbo,
    /// Anchor outputs (`option_anchor_outputs`).
    #[doc(alias = "option_anchor_outputs")]
    AnchorOutputs,
    /// Anchor commitment type with zero fee HTLC transactions (`option_anchors_zero_fee_htlc_tx`).
    #[doc(alias = "option_anchors_zero_fee_htlc_tx")]
    AnchorOutputsZeroFeeHtlcTx,
    /// Future segwit versions allowed in `shutdown` (`option_shutdown_anysegwit`).
    #[doc(alias = "option_shutdown_anysegwit")]
    ShutdownAnySegwit,
    /// Can forward onion messages (`option_onion_messages`).
    #[doc(alias = "option_onion_messages")]
    OnionMessages,
    /// Node supports the `channel_type` field in `open_channel` (`option_channel_type`).
    #[doc(alias = "option_channel_type")]
    ChannelType,
    /// Payment metadata in invoice tagged fields (`option_payment_metadata`).
    #[doc(alias = "option_payment_metadata")]
    PaymentMetadata,
    /// Node can relay or receive trampoline payments (`trampoline_payment`).
    #[doc(alias = "trampoline_payment")]
    TrampolinePayment,
    /// Node accepts spontaneous payments (`keysend`).
    #[doc(alias = "keysend")]
    KeySend,
}

/// Static catalog entry describing one feature.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureDescriptor {
    feature: Feature,
    name: &'static str,
    mandatory_bit: u32,
    scopes: ScopeSet,
}

impl FeatureDescriptor {
    const fn new(feature: Feature, name: &'static str, mandatory_bit: u32, scopes: ScopeSet) -> Self {
        Self {
            feature,
            name,
            mandatory_bit,
            scopes,
        }
    }

    /// Returns the feature this entry describes.
    #[must_use]
    pub const fn feature(&self) -> Feature {
        self.feature
    }

    /// Returns the canonical BOLT9 name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the even bit signalling mandatory support.
    #[must_use]
    pub const fn mandatory_bit(&self) -> u32 {
        self.mandatory_bit
    }

    /// Returns the odd bit signalling optional support.
    #[must_use]
    pub const fn optional_bit(&self) -> u32 {
        self.mandatory_bit + 1
    }

    /// Returns the contexts the feature may appear in.
    #[must_use]
    pub const fn scopes(&self) -> ScopeSet {
        self.scopes
    }
}

/// Catalog entries indexed by `Feature` discriminant, in ascending bit order.
pub(super) const CATALOG: [FeatureDescriptor; Feature::COUNT] = [
    FeatureDescriptor::new(Feature::DataLossProtect, "option_data_loss_protect", 0, H.union(N)),
    FeatureDescriptor::new(Feature::InitialRoutingSync, "initial_routing_sync", 2, H),
    FeatureDescriptor::new(Feature::ChannelRangeQueries, "gossip_queries", 6, H.union(N)),
    FeatureDescriptor::new(Feature::VariableLengthOnion, "var_onion_optin", 8, H.union(N).union(I)),
    FeatureDescriptor::new(
        Feature::ChannelRangeQueriesExtended,
        "gossip_queries_ex",
        10,
        H.union(N),
    ),
    FeatureDescriptor::new(Feature::StaticRemoteKey, "option_static_remotekey", 12, H.union(N)),
    FeatureDescriptor::new(Feature::PaymentSecret, "payment_secret", 14, H.union(N).union(I)),
    FeatureDescriptor::new(Feature::BasicMultiPartPayment, "basic_mpp", 16, H.union(N).union(I)),
    FeatureDescriptor::new(Feature::Wumbo, "option_support_large_channel", 18, H.union(N)),
    FeatureDescriptor::new(Feature::AnchorOutputs, "option_anchor_outputs", 20, H.union(N)),
    FeatureDescriptor::new(
        Feature::AnchorOutputsZeroFeeHtlcTx,
        "option_anchors_zero_fee_htlc_tx",
        22,
        H.union(N),
    ),
    FeatureDescriptor::new(Feature::ShutdownAnySegwit, "option_shutdown_anysegwit", 26, H.union(N)),
    FeatureDescriptor::new(Feature::OnionMessages, "option_onion_messages", 38, H.union(N)),
    FeatureDescriptor::new(Feature::ChannelType, "option_channel_type", 44, H.union(N)),
    FeatureDescriptor::new(Feature::PaymentMetadata, "option_payment_metadata", 48, I),
    FeatureDescriptor::new(
        Feature::TrampolinePayment,
        "trampoline_payment",
        50,
        H.union(N).union(I),
    ),
    FeatureDescriptor::new(Feature::KeySend, "keysend", 54, N),
];

impl Feature {
    /// Number of catalog entries.
    pub const COUNT: usize = 17;

    /// Every known feature in ascending bit order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::DataLossProtect,
        Self::InitialRoutingSync,
        Self::ChannelRangeQueries,
        Self::VariableLengthOnion,
        Self::ChannelRangeQueriesExtended,
        Self::StaticRemoteKey,
        Self::PaymentSecret,
        Self::BasicMultiPartPayment,
        Self::Wumbo,
        Self::AnchorOutputs,
        Self::AnchorOutputsZeroFeeHtlcTx,
        Self::ShutdownAnySegwit,
        Self::OnionMessages,
        Self::ChannelType,
        Self::PaymentMetadata,
        Self::TrampolinePayment,
        Self::KeySend,
    ];

    /// Returns the catalog entry for the feature.
    #[must_use]
    pub const fn descriptor(self) -> &'static FeatureDescriptor {
        &Self::catalog()[self as usize]
    }

    /// Returns the catalog entries in ascending bit order.
    #[must_use]
    pub const fn catalog() -> &'static [FeatureDescriptor] {
        &CATALOG
    }

    /// Returns the canonical BOLT9 name, e.g. `var_onion_optin`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the even bit signalling mandatory support.
    #[must_use]
    pub const fn mandatory_bit(self) -> u32 {
        self.descriptor().mandatory_bit
    }

    /// Returns the odd bit signalling optional support.
    #[must_use]
    pub const fn optional_bit(self) -> u32 {
        self.descriptor().optional_bit()
    }

    /// Returns the bit that signals the feature at `level`.
    #[must_use]
    pub const fn support_bit(self, level: SupportLevel) -> u32 {
        self.mandatory_bit() + level.bit_offset()
    }

    /// Returns the contexts the feature may appear in.
    #[must_use]
    pub const fn scopes(self) -> ScopeSet {
        self.descriptor().scopes
    }

    /// Iterates over every known feature in ascending bit order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl FromStr for Feature {
    type Err = ParseFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|entry| entry.name == s)
            .map(FeatureDescriptor::feature)
            .ok_or_else(|| ParseFeatureError::new(s))
    }
}

impl TryFrom<String> for Feature {
    type Error = ParseFeatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feature> for &'static str {
    fn from(feature: Feature) -> Self {
        feature.name()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
