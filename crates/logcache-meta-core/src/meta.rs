//! Retention metadata reported by log-cache, one entry per source.
//!
//! The log-cache gateway serialises int64 fields as JSON strings, so the
//! numeric fields here accept either a string or a number.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Opaque identifier of a telemetry source.
pub type SourceId = String;

/// Metadata for every source log-cache is holding, keyed by source id.
///
/// Ordered so that truncation and the unnamed/platform groups are stable.
pub type MetaMap = BTreeMap<SourceId, MetaInfo>;

/// Maximum number of sources carried into directory resolution.
pub const MAX_SOURCES: usize = 50;

/// Retention statistics for one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaInfo {
    /// Records currently buffered.
    #[serde(deserialize_with = "int64")]
    pub count: i64,
    /// Records pruned since the source was first seen.
    #[serde(deserialize_with = "int64")]
    pub expired: i64,
    /// Oldest buffered record, nanoseconds since the epoch.
    #[serde(deserialize_with = "int64")]
    pub oldest_timestamp: i64,
    /// Newest buffered record, nanoseconds since the epoch.
    #[serde(deserialize_with = "int64")]
    pub newest_timestamp: i64,
}

impl MetaInfo {
    /// Span between the oldest and newest record, truncated to whole seconds.
    ///
    /// Saturates at zero when `newest < oldest`.
    pub fn cache_duration(&self) -> Duration {
        let span = self.newest_timestamp.saturating_sub(self.oldest_timestamp);
        if span < 0 {
            log::warn!(
                "newest timestamp {} precedes oldest {}",
                self.newest_timestamp,
                self.oldest_timestamp
            );
            return Duration::ZERO;
        }
        Duration::from_secs(span as u64 / 1_000_000_000)
    }
}

/// Keep at most `max` entries, the lowest source ids first.
///
/// The cap only bounds the size of the directory lookup and the report; the
/// selection carries no meaning beyond being reproducible.
pub fn truncate(max: usize, meta: MetaMap) -> MetaMap {
    if meta.len() > max {
        log::debug!("truncating {} sources to {max}", meta.len());
    }
    meta.into_iter().take(max).collect()
}

/// Render a whole-second duration compactly: `0s`, `45s`, `1m30s`, `2h0m5s`.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}

fn int64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Number(i64),
        Text(String),
    }

    match Int64::deserialize(deserializer)? {
        Int64::Number(n) => Ok(n),
        Int64::Text(s) if s.is_empty() => Ok(0),
        Int64::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
