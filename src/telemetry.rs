//! Opt-in tracing setup for hosts and the bundled CLI.
//!
//! Library code only emits `tracing` events. Nothing is printed until a
//! subscriber is installed, either here or by the embedding application.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "mood_chart=info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG` or
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"mood_chart=debug"` to see dropped normalization records.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        // stdout carries the CSS/JSON output
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
