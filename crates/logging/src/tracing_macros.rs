//! crates/logging/src/tracing_macros.rs
//! Convenience macros for feature-negotiation tracing.
//!
//! These macros wrap the standard tracing macros with the targets listed in
//! [`crate::targets`] so subscribers can filter each subsystem on its own.

/// Emit a feature bitmap codec trace.
///
/// # Example
/// ```ignore
/// trace_codec!(bytes = input.len(), "decoded feature bitmap");
/// ```
#[macro_export]
macro_rules! trace_codec {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::targets::CODEC, $($arg)*);
    };
}

/// Emit a peer compatibility trace.
///
/// # Example
/// ```ignore
/// trace_compat!(requirement = %missing, "peer requirement not supported");
/// ```
#[macro_export]
macro_rules! trace_compat {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::targets::COMPAT, $($arg)*);
    };
}

/// Emit a feature configuration trace.
///
/// # Example
/// ```ignore
/// trace_config!(entries = count, "parsed feature configuration");
/// ```
#[macro_export]
macro_rules! trace_config {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::targets::CONFIG, $($arg)*);
    };
}

/// Emit a warning about bitmap input that could only be partially decoded.
///
/// # Example
/// ```ignore
/// warn_codec!(skipped = count, "feature bitmap exceeds addressable bit range");
/// ```
#[macro_export]
macro_rules! warn_codec {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::targets::CODEC, $($arg)*);
    };
}
