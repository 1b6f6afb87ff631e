//! Subscriber setup for binaries embedding oalkit.
//!
//! Library code only emits `tracing` events; nothing is printed until the
//! host installs a subscriber, either its own or the one below.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "oalkit=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install a fmt subscriber writing diagnostics to stderr. Does nothing if a
/// global subscriber is already set.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter: EnvFilter = DEFAULT_FILTER.into();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::INFO)
        );
        let _ = env_filter();
    }
}
