//! # Overview
//!
//! The feature catalog is the closed set of BOLT9 features this crate
//! understands. Each entry owns a pair of bit positions: the even mandatory
//! bit and the odd optional bit immediately after it. Bit assignments are
//! published protocol constants shared by every implementation, so the
//! values below must never be renumbered.
//!
//! # Design
//!
//! [`Feature`] is a plain enum whose discriminant indexes the static
//! [`FeatureDescriptor`] table. Reverse lookups by bit index go through a
//! table built in a `const` context; a duplicate or odd mandatory bit makes
//! that evaluation panic, so a malformed catalog never compiles.
//!
//! # Examples
//!
//! ```
//! use features::{Feature, Scope, SupportLevel};
//!
//! let onion = Feature::from_mandatory_bit(8).expect("bit 8 is var_onion_optin");
//! assert_eq!(onion, Feature::VariableLengthOnion);
//! assert_eq!(onion.optional_bit(), 9);
//! assert!(onion.scopes().contains(Scope::Invoice));
//! assert_eq!(Feature::from_bit(15), Some((Feature::PaymentSecret, SupportLevel::Optional)));
//! ```

mod descriptor;
mod index;

pub use descriptor::{Feature, FeatureDescriptor};
