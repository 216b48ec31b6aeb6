#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! BOLT9 feature bitmaps for Lightning-style peer negotiation.
//!
//! Every optional protocol extension owns a pair of bits: an even
//! *mandatory* bit and the odd *optional* bit after it. The crate provides the
//! closed [`Feature`] catalog with the [`Scope`]s each feature may appear in,
//! the immutable [`FeatureSet`] container, the byte codec used by `init`,
//! `node_announcement` and invoices, and the compatibility predicates that
//! decide whether two peers may talk to each other.
//!
//! Everything here is pure: decoding never fails, unknown bits are carried
//! rather than rejected, and incompatibility is reported as `false` for the
//! caller to act on.
//!
//! # Examples
//!
//! Decode a peer's `init` features and check them against ours:
//!
//! ```
//! use features::{Feature, FeatureSet, SupportLevel, are_compatible, can_use_feature};
//!
//! let local: FeatureSet = "var_onion_optin=mandatory,payment_secret=optional,basic_mpp=optional"
//!     .parse()
//!     .expect("valid feature configuration");
//! let remote = FeatureSet::decode(&[0x02, 0x41, 0x00]);
//!
//! assert!(remote.has_feature(Feature::VariableLengthOnion, Some(SupportLevel::Mandatory)));
//! assert!(are_compatible(&local, &remote));
//! assert!(can_use_feature(&local, &remote, Feature::BasicMultiPartPayment));
//! assert_eq!(local.handshake_scoped().encode(), vec![0x02, 0x81, 0x00]);
//! ```

mod catalog;
mod codec;
mod compat;
mod error;
mod level;
mod scope;
mod set;

pub use catalog::{Feature, FeatureDescriptor};
pub use compat::{
    MissingRequirement, are_compatible, can_use_feature, is_supported_by, missing_requirements,
};
pub use error::{InvalidUnknownBit, ParseFeatureError, ParseFeatureSetError, ParseSupportLevelError};
pub use level::SupportLevel;
pub use scope::{Scope, ScopeSet, ScopeSetIter};
pub use set::{FeatureSet, UnknownBit};
