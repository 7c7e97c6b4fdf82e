//! TTL string parsing.

use std::time::Duration;
use tracing::warn;

/// Parses a TTL string of the form `<int>s` (seconds) or `<int>m` (minutes).
///
/// Any other or missing format resolves to a zero duration, which
/// effectively disables caching (entries would expire immediately, so cache
/// writes are skipped). This is a deliberate fallback policy, not an error.
#[must_use]
pub fn parse_ttl(ttl: &str) -> Duration {
    let parsed = match ttl.as_bytes().last() {
        Some(b'm') => ttl[..ttl.len() - 1]
            .parse::<u64>()
            .ok()
            .map(|minutes| Duration::from_secs(minutes * 60)),
        Some(b's') => ttl[..ttl.len() - 1]
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!("Unparseable cache TTL '{}', falling back to zero (cache disabled)", ttl);
        Duration::ZERO
    })
}
