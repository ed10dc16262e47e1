//! Wise Old Man API integration.
//!
//! The tracker serves per-player gained snapshots. This module owns the
//! blocking HTTP client, the source trait the pipeline consumes, and the
//! tracker site URLs embedded in notifications.

mod client;

pub use client::{ApiSettings, FetchError, WomClient};

use serde_json::Value;

use crate::domain::Period;

/// Default API root for player endpoints
pub const DEFAULT_API_BASE_URL: &str = "https://api.wiseoldman.net/v2/players";

/// Root of the public tracker site
const SITE_BASE_URL: &str = "https://wiseoldman.net";

/// External source of raw gained documents. [`WomClient`] is the
/// production implementation; tests drive the pipeline with stubs.
pub trait GainsSource {
    /// Fetches the raw gained document for one player over the period.
    fn fetch_gained(&self, username: &str, period: Period) -> Result<Value, FetchError>;

    /// Asks the tracker to refresh its snapshot of the player before gains
    /// are read. Best effort; callers treat failures as noise.
    fn request_update(&self, username: &str) -> Result<(), FetchError>;
}

fn encode_url_path_segment(segment: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        let is_unreserved =
            matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~');
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Public profile URL for a player's gained page on the tracker site.
pub fn player_gained_url(username: &str, period: Period) -> String {
    format!(
        "{}/players/{}/gained?period={}",
        SITE_BASE_URL,
        encode_url_path_segment(username),
        period.as_str()
    )
}
