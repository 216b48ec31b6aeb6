#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the diagnostics plumbing shared by the feature negotiation
//! crates: the tracing [`targets`] each subsystem emits under, the
//! `trace_*!` macros that bind events to those targets, and a
//! [`VerbosityConfig`] that maps a single verbosity number onto per-target
//! levels.
//!
//! With the `subscriber` feature enabled the crate can also install a
//! `tracing-subscriber` fmt layer filtered by that configuration.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let config = VerbosityConfig::from_verbose_level(1);
//! assert!(config.to_directives().contains("features::compat=debug"));
//! ```

mod config;
pub mod targets;
mod tracing_macros;

#[cfg(feature = "subscriber")]
mod tracing_bridge;

pub use config::{TargetLevel, VerbosityConfig};

#[cfg(feature = "subscriber")]
pub use tracing_bridge::{env_filter, init_test_tracing, init_tracing};
