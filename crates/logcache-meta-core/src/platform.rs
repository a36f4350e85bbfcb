//! The operator's local platform session, as written by the cf CLI.
//!
//! `cf login` stores the API target and tokens in `<home>/.cf/config.json`.
//! Only the fields this tool needs are read.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// API target and credentials of the logged-in operator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlatformSession {
    target: String,
    access_token: String,
    uaa_endpoint: String,
}

impl PlatformSession {
    /// Path of the session file under a cf home directory.
    pub fn config_path(cf_home: &Path) -> PathBuf {
        cf_home.join(".cf").join("config.json")
    }

    /// Load the session from `<cf_home>/.cf/config.json`.
    pub fn load(cf_home: &Path) -> Result<Self> {
        let path = Self::config_path(cf_home);
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Platform(format!("{}: {e}", path.display())))?;
        let session: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::Platform(format!("{}: {e}", path.display())))?;
        log::debug!("loaded platform session for {}", session.target);
        Ok(session)
    }

    /// The platform's primary API endpoint.
    pub fn api_endpoint(&self) -> Result<String> {
        if self.target.is_empty() {
            return Err(Error::Platform(
                "no API endpoint set, run 'cf login' first".to_string(),
            ));
        }
        Ok(self.target.clone())
    }

    /// Access token including its `bearer ` prefix.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn uaa_endpoint(&self) -> &str {
        &self.uaa_endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cf_config() {
        let session: PlatformSession = serde_json::from_str(
            r#"{
                "ConfigVersion": 3,
                "Target": "https://api.sys.example.com",
                "AccessToken": "bearer abc",
                "UaaEndpoint": "https://uaa.sys.example.com",
                "SpaceFields": {"GUID": "x"}
            }"#,
        )
        .unwrap();
        assert_eq!(session.api_endpoint().unwrap(), "https://api.sys.example.com");
        assert_eq!(session.access_token(), "bearer abc");
        assert_eq!(session.uaa_endpoint(), "https://uaa.sys.example.com");
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let session: PlatformSession = serde_json::from_str("{}").unwrap();
        assert!(matches!(session.api_endpoint(), Err(Error::Platform(_))));
    }

    #[test]
    fn test_config_path_layout() {
        let path = PlatformSession::config_path(Path::new("/home/op"));
        assert_eq!(path, PathBuf::from("/home/op/.cf/config.json"));
    }
}
