//! crates/logging/src/config.rs
//! Verbosity configuration mapped onto per-target tracing levels.

use std::fmt;

use crate::targets;

/// Level recorded for a single tracing target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetLevel {
    /// Events for the target are discarded.
    #[default]
    Off,
    /// Debug events and above are recorded.
    Debug,
    /// Every event is recorded.
    Trace,
}

impl TargetLevel {
    /// Returns the `EnvFilter` level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-subsystem verbosity for feature negotiation diagnostics.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Bitmap encode/decode events.
    pub codec: TargetLevel,
    /// Compatibility verdicts and unmet requirements.
    pub compat: TargetLevel,
    /// Feature configuration parsing.
    pub config: TargetLevel,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-3).
    ///
    /// Level 1 surfaces rejected peers, level 2 adds configuration and
    /// codec debug output, level 3 and above trace everything.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.compat = TargetLevel::Debug;
            }
            2 => {
                config.compat = TargetLevel::Debug;
                config.config = TargetLevel::Debug;
                config.codec = TargetLevel::Debug;
            }
            _ => {
                config.compat = TargetLevel::Trace;
                config.config = TargetLevel::Trace;
                config.codec = TargetLevel::Trace;
            }
        }

        config
    }

    /// Returns the level configured for `target`, or `None` for foreign targets.
    #[must_use]
    pub fn level_for(&self, target: &str) -> Option<TargetLevel> {
        match target {
            targets::CODEC => Some(self.codec),
            targets::COMPAT => Some(self.compat),
            targets::CONFIG => Some(self.config),
            _ => None,
        }
    }

    /// Renders the configuration as `EnvFilter` directives.
    ///
    /// Everything outside the feature targets stays at `warn`.
    #[must_use]
    pub fn to_directives(&self) -> String {
        let mut directives = String::from("warn");
        for target in targets::ALL {
            if let Some(level) = self.level_for(target) {
                directives.push(',');
                directives.push_str(target);
                directives.push('=');
                directives.push_str(level.as_str());
            }
        }
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_silences_every_target() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(config, VerbosityConfig::default());
        assert_eq!(
            config.to_directives(),
            "warn,features::codec=off,features::compat=off,features::config=off"
        );
    }

    #[test]
    fn level_one_enables_compatibility_only() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(config.compat, TargetLevel::Debug);
        assert_eq!(config.codec, TargetLevel::Off);
        assert_eq!(config.config, TargetLevel::Off);
    }

    #[test]
    fn high_levels_saturate_at_trace() {
        for level in [3, 4, 200] {
            let config = VerbosityConfig::from_verbose_level(level);
            assert_eq!(config.codec, TargetLevel::Trace);
            assert_eq!(config.compat, TargetLevel::Trace);
            assert_eq!(config.config, TargetLevel::Trace);
        }
    }

    #[test]
    fn level_for_ignores_foreign_targets() {
        let config = VerbosityConfig::from_verbose_level(2);
        assert_eq!(config.level_for("features::codec"), Some(TargetLevel::Debug));
        assert_eq!(config.level_for("rsync::protocol"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_snake_case_levels() {
        let config = VerbosityConfig::from_verbose_level(1);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"codec":"off","compat":"debug","config":"off"}"#);
        let back: VerbosityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
