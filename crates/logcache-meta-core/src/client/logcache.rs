//! log-cache HTTP gateway: retention metadata and windowed reads.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use url::Url;

use super::{HttpClient, MetaSource, Tailer};
use crate::error::{Error, Result};
use crate::meta::MetaMap;

/// Largest page the gateway serves for a single read.
pub const READ_LIMIT: usize = 1000;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetaResponse {
    meta: MetaMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReadResponse {
    envelopes: EnvelopeBatch,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvelopeBatch {
    batch: Vec<serde_json::Value>,
}

/// Client for one log-cache endpoint.
#[derive(Debug, Clone)]
pub struct LogCacheClient {
    endpoint: String,
    http: HttpClient,
}

impl LogCacheClient {
    /// `token` is sent with every request; pass `None` to skip auth.
    pub fn new(endpoint: &str, token: Option<String>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: HttpClient::new(token),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Read URL for `source_id`, percent-encoded as a single path segment.
    fn read_url(&self, source_id: &str) -> Result<String> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| Error::fetch(&self.endpoint, e))?;
        url.path_segments_mut()
            .map_err(|_| Error::fetch(&self.endpoint, "endpoint cannot carry a path"))?
            .pop_if_empty()
            .extend(["api", "v1", "read", source_id]);
        Ok(url.into())
    }

    /// One page of envelopes for `source_id` in `[start_ns, end_ns)`.
    fn read(&self, source_id: &str, start_ns: i64, end_ns: i64) -> Result<Vec<serde_json::Value>> {
        let url = self.read_url(source_id)?;
        let start = start_ns.to_string();
        let end = end_ns.to_string();
        let limit = READ_LIMIT.to_string();
        let resp: ReadResponse = self.http.get_json(
            &url,
            &[
                ("start_time", start.as_str()),
                ("end_time", end.as_str()),
                ("limit", limit.as_str()),
            ],
        )?;
        Ok(resp.envelopes.batch)
    }
}

impl MetaSource for LogCacheClient {
    fn meta(&self) -> Result<MetaMap> {
        let url = format!("{}/api/v1/meta", self.endpoint);
        let resp: MetaResponse = self.http.get_json(&url, &[])?;
        log::debug!("log-cache reports {} sources", resp.meta.len());
        Ok(resp.meta)
    }
}

impl Tailer for LogCacheClient {
    /// Walk every page in the window. A full page continues just after its
    /// last envelope; a short page, or a last timestamp outside the window,
    /// ends the walk.
    fn tail(&self, source_id: &str, start: SystemTime, end: SystemTime) -> Result<Vec<String>> {
        let end_ns = unix_nanos(end);
        let mut start_ns = unix_nanos(start);
        let mut lines = Vec::new();

        while start_ns < end_ns {
            let page = self.read(source_id, start_ns, end_ns)?;
            let full = page.len() >= READ_LIMIT;
            let last = page.last().and_then(envelope_timestamp);
            lines.extend(page.iter().map(|e| e.to_string()));

            match last {
                Some(ts) if full && ts >= start_ns && ts < end_ns => start_ns = ts + 1,
                _ => break,
            }
        }

        log::debug!("{source_id}: {} lines in window", lines.len());
        Ok(lines)
    }
}

fn unix_nanos(t: SystemTime) -> i64 {
    let d = t.duration_since(UNIX_EPOCH).unwrap_or_default();
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

fn envelope_timestamp(envelope: &serde_json::Value) -> Option<i64> {
    match envelope.get("timestamp")? {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
