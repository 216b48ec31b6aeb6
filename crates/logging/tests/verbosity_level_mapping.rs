//! Integration tests for verbosity level mapping and target filtering.
//!
//! Test coverage:
//! 1. Each verbose level maps to the expected per-target levels
//! 2. Rendered directives filter the `trace_*!` macros by target

use logging::{TargetLevel, VerbosityConfig, targets};

// ============================================================================
// Level Mapping
// ============================================================================

#[test]
fn verbose_levels_increase_monotonically() {
    let mut previous = VerbosityConfig::from_verbose_level(0);
    for level in 1..=4 {
        let current = VerbosityConfig::from_verbose_level(level);
        assert!(current.codec >= previous.codec, "level {level}");
        assert!(current.compat >= previous.compat, "level {level}");
        assert!(current.config >= previous.config, "level {level}");
        previous = current;
    }
}

#[test]
fn level_two_debugs_every_target() {
    let config = VerbosityConfig::from_verbose_level(2);
    for target in targets::ALL {
        assert_eq!(config.level_for(target), Some(TargetLevel::Debug), "{target}");
    }
}

#[test]
fn directives_list_every_target_once() {
    let directives = VerbosityConfig::from_verbose_level(3).to_directives();
    for target in targets::ALL {
        assert_eq!(directives.matches(&format!("{target}=")).count(), 1, "{directives}");
    }
    assert!(directives.starts_with("warn,"));
}

// ============================================================================
// Target Filtering
// ============================================================================

#[cfg(feature = "subscriber")]
mod filtering {
    use std::io;
    use std::sync::{Arc, Mutex};

    use logging::{VerbosityConfig, targets, trace_codec, trace_compat, trace_config, warn_codec};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(config: VerbosityConfig, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(config.to_directives()))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        captured.contents()
    }

    fn emit_all() {
        trace_codec!("codec event");
        trace_compat!("compat event");
        trace_config!("config event");
    }

    #[test]
    fn level_zero_emits_nothing() {
        let output = capture(VerbosityConfig::from_verbose_level(0), emit_all);
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn level_one_emits_compatibility_only() {
        let output = capture(VerbosityConfig::from_verbose_level(1), emit_all);
        assert!(output.contains("compat event"), "{output}");
        assert!(!output.contains("config event"), "{output}");
        assert!(!output.contains("codec event"), "{output}");
    }

    #[test]
    fn codec_events_need_trace_level() {
        let output = capture(VerbosityConfig::from_verbose_level(2), emit_all);
        assert!(output.contains("config event"), "{output}");
        assert!(!output.contains("codec event"), "{output}");

        let output = capture(VerbosityConfig::from_verbose_level(3), emit_all);
        assert!(output.contains("codec event"), "{output}");
    }

    #[test]
    fn events_carry_the_shared_target_names() {
        let output = capture(VerbosityConfig::from_verbose_level(3), || {
            emit_all();
            warn_codec!("codec warning");
        });
        assert!(output.contains(&format!("{}: codec event", targets::CODEC)), "{output}");
        assert!(output.contains(&format!("{}: compat event", targets::COMPAT)), "{output}");
        assert!(output.contains(&format!("{}: config event", targets::CONFIG)), "{output}");
        assert!(output.contains(&format!("{}: codec warning", targets::CODEC)), "{output}");
    }
}
