//! crates/logging/src/targets.rs
//! Tracing targets used by the feature negotiation crates.

/// Bitmap encoding and decoding.
pub const CODEC: &str = "features::codec";

/// Compatibility predicates evaluated against peer feature sets.
pub const COMPAT: &str = "features::compat";

/// Parsing of textual feature configuration.
pub const CONFIG: &str = "features::config";

/// Every target, in the order used when rendering filter directives.
pub const ALL: [&str; 3] = [CODEC, COMPAT, CONFIG];
