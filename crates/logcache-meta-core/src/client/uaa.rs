//! Operator identity from the UAA `userinfo` endpoint.

use serde::Deserialize;

use super::{HttpClient, Identity};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct UserInfo {
    user_name: String,
}

#[derive(Debug, Clone)]
pub struct UaaClient {
    uaa: String,
    http: HttpClient,
}

impl UaaClient {
    pub fn new(uaa_endpoint: &str, token: &str) -> Self {
        Self {
            uaa: uaa_endpoint.trim_end_matches('/').to_string(),
            http: HttpClient::new(Some(token.to_string())),
        }
    }
}

impl Identity for UaaClient {
    fn username(&self) -> Result<String> {
        if self.uaa.is_empty() {
            return Err(Error::Identity("no UAA endpoint in platform session".to_string()));
        }

        let url = format!("{}/userinfo", self.uaa);
        let info: UserInfo = self
            .http
            .get_json(&url, &[])
            .map_err(|e| Error::Identity(e.to_string()))?;
        Ok(info.user_name)
    }
}
