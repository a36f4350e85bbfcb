//! Cloud Controller v3 application lookup.

use serde::Deserialize;

use super::{AppDirectory, HttpClient};
use crate::correlate::App;
use crate::error::Result;
use crate::meta::SourceId;

#[derive(Debug, Deserialize)]
struct AppsResponse {
    resources: Vec<App>,
}

/// Resolves application GUIDs against the platform API.
#[derive(Debug, Clone)]
pub struct CapiClient {
    api: String,
    http: HttpClient,
}

impl CapiClient {
    pub fn new(api_endpoint: &str, token: &str) -> Self {
        Self {
            api: api_endpoint.trim_end_matches('/').to_string(),
            http: HttpClient::new(Some(token.to_string())),
        }
    }
}

impl AppDirectory for CapiClient {
    /// One batched request for every id. Callers keep the batch within the
    /// API's default page size of 50.
    fn resolve(&self, ids: &[SourceId]) -> Result<Vec<App>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v3/apps", self.api);
        let guids = ids.join(",");
        let resp: AppsResponse = self.http.get_json(&url, &[("guids", guids.as_str())])?;
        log::debug!("resolved {} of {} ids to apps", resp.resources.len(), ids.len());
        Ok(resp.resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_apps_response() {
        let resp: AppsResponse = serde_json::from_str(
            r#"{
                "pagination": {"total_results": 1},
                "resources": [{"guid": "g-1", "name": "billing", "state": "STARTED"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            resp.resources,
            vec![App {
                guid: "g-1".to_string(),
                name: "billing".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_resources_rejected() {
        assert!(serde_json::from_str::<AppsResponse>(r#"{"errors": []}"#).is_err());
    }

    #[test]
    fn test_empty_ids_skip_request() {
        let client = CapiClient::new("http://127.0.0.1:1", "bearer t");
        assert!(client.resolve(&[]).unwrap().is_empty());
    }
}
