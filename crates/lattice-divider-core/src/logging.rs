//! Logging facilities for Lattice Divider.
//!
//! The engine is instrumented with the `tracing` crate. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_divider=debug")
//!     .init();
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Builder and option resolution.
    pub const BUILDER: &str = "lattice_divider::builder";
    /// Inset computation during measurement.
    pub const OFFSETS: &str = "lattice_divider::offsets";
    /// Draw planning during paint.
    pub const DRAW: &str = "lattice_divider::draw";
    /// Decoration registration on hosts.
    pub const HOST: &str = "lattice_divider::host";
    /// Loading divider defaults.
    pub const CONFIG: &str = "lattice_divider::config";
    /// Lazily created default providers.
    pub const PROVIDERS: &str = "lattice_divider::providers";
    /// Performance spans.
    pub const PERF: &str = "lattice_divider::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Wraps a single paint or measurement pass so its duration shows up in
/// profiling subscribers.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_nests() {
        let _outer = PerfSpan::new("outer");
        let _inner = PerfSpan::new("inner");
    }

    #[test]
    fn test_targets_share_prefix() {
        for target in [
            targets::BUILDER,
            targets::OFFSETS,
            targets::DRAW,
            targets::HOST,
            targets::PROVIDERS,
            targets::CONFIG,
            targets::PERF,
        ] {
            assert!(target.starts_with("lattice_divider::"));
        }
    }
}
