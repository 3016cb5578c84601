// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Events go to stderr through a `fmt` layer. The filter is taken from the
//! `--log` CLI argument, then the `ICED_GALLERY_LOG` environment variable,
//! then defaults to `info` for this crate and `warn` for dependencies.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const ENV_LOG: &str = "ICED_GALLERY_LOG";

const DEFAULT_FILTER: &str = "warn,iced_gallery=info";

/// Returns the filter directive to use, in priority order.
#[must_use]
pub fn resolve_filter(cli_filter: Option<&str>, env_filter: Option<&str>) -> String {
    [cli_filter, env_filter]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs the global subscriber.
///
/// Idempotent: later calls leave the first subscriber in place. Invalid
/// directives fall back to the default filter.
pub fn init(cli_filter: Option<&str>) {
    let env_filter = std::env::var(ENV_LOG).ok();
    let directive = resolve_filter(cli_filter, env_filter.as_deref());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directive:?}: {err}; using {DEFAULT_FILTER:?}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_filter_wins() {
        assert_eq!(resolve_filter(Some("debug"), Some("trace")), "debug");
    }

    #[test]
    fn env_filter_used_without_cli() {
        assert_eq!(resolve_filter(None, Some("iced_gallery=trace")), "iced_gallery=trace");
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(resolve_filter(Some("  "), None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("error"));
        init(Some("error"));
    }
}
