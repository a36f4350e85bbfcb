//! Blocking JSON-over-HTTP with an optional bearer token.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Thin wrapper over a `ureq` agent shared by the platform clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    token: Option<String>,
}

impl HttpClient {
    /// Client that attaches `token` as the `Authorization` header, if given.
    pub fn new(token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(30))
            .user_agent(concat!("logcache-meta/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// GET `url` with `query` parameters and decode the JSON body.
    ///
    /// The body is decoded straight from the response stream, so large read
    /// pages are not subject to a buffered-string size cap.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self.get(url, query)?;
        serde_json::from_reader(response.into_reader()).map_err(|e| {
            if e.is_io() {
                Error::fetch(url, e)
            } else {
                Error::decode(url, e)
            }
        })
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<ureq::Response> {
        log::debug!("GET {url} {query:?}");

        let mut request = self.agent.get(url).set("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", token);
        }
        for (key, value) in query {
            request = request.query(key, value);
        }

        match request.call() {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(Error::fetch(url, format!("HTTP {code}: {}", body.trim())))
            }
            Err(e) => Err(Error::fetch(url, e)),
        }
    }
}
