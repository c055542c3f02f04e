//! Cache-busting helpers for published sheet URLs.
//!
//! Published spreadsheet exports sit behind aggressive CDN caches, so every
//! fetch carries a throwaway `nocache` timestamp parameter.

use std::time::{SystemTime, UNIX_EPOCH};

/// Append a `nocache` parameter carrying the current time in milliseconds.
pub fn cache_bust(url: &str) -> String {
    cache_bust_at(url, current_millis())
}

/// Append a `nocache` parameter with an explicit millisecond value.
pub fn cache_bust_at(url: &str, millis: u128) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}nocache={}", url, separator, millis)
}

/// Get the current timestamp in milliseconds since the Unix epoch.
fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
