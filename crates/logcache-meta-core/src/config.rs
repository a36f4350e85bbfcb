//! Startup configuration and log-cache endpoint resolution.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Overrides the derived log-cache endpoint when set and non-empty.
pub const ENV_LOG_CACHE_ADDR: &str = "LOG_CACHE_ADDR";
/// Case-insensitive `true` disables the bearer token on log-cache requests.
pub const ENV_SKIP_AUTH: &str = "LOG_CACHE_SKIP_AUTH";
/// Directory holding `.cf/config.json`; falls back to `HOME`.
pub const ENV_CF_HOME: &str = "CF_HOME";

/// Options recognised from the environment, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub endpoint_override: Option<String>,
    pub skip_auth: bool,
    pub cf_home: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint_override = lookup(ENV_LOG_CACHE_ADDR).filter(|v| !v.is_empty());
        let skip_auth = lookup(ENV_SKIP_AUTH).is_some_and(|v| v.eq_ignore_ascii_case("true"));
        let cf_home = lookup(ENV_CF_HOME)
            .filter(|v| !v.is_empty())
            .or_else(|| lookup("HOME"))
            .map(PathBuf::from);

        Self {
            endpoint_override,
            skip_auth,
            cf_home,
        }
    }

    /// Decide which log-cache endpoint to query.
    ///
    /// The override is used verbatim. Otherwise the first `api` in the
    /// platform API endpoint becomes `log-cache`, so
    /// `https://api.sys.example.com` maps to `https://log-cache.sys.example.com`.
    pub fn log_cache_endpoint<F>(&self, api_endpoint: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(addr) = &self.endpoint_override {
            log::debug!("using {ENV_LOG_CACHE_ADDR} override {addr}");
            return Ok(addr.clone());
        }

        let api = api_endpoint().map_err(|e| Error::EndpointResolution(e.to_string()))?;
        Ok(api.replacen("api", "log-cache", 1))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_CACHE_ADDR", "http://localhost:8080"),
            ("LOG_CACHE_SKIP_AUTH", "TRUE"),
            ("CF_HOME", "/tmp/cf"),
            ("HOME", "/home/op"),
        ]));
        assert_eq!(config.endpoint_override.as_deref(), Some("http://localhost:8080"));
        assert!(config.skip_auth);
        assert_eq!(config.cf_home, Some(PathBuf::from("/tmp/cf")));
    }

    #[test]
    fn test_skip_auth_only_for_true() {
        for value in ["1", "yes", "false", ""] {
            let config = Config::from_lookup(lookup(&[("LOG_CACHE_SKIP_AUTH", value)]));
            assert!(!config.skip_auth, "{value:?} must not skip auth");
        }
    }

    #[test]
    fn test_empty_override_is_absent_and_home_fallback() {
        let config = Config::from_lookup(lookup(&[("LOG_CACHE_ADDR", ""), ("HOME", "/home/op")]));
        assert_eq!(config.endpoint_override, None);
        assert_eq!(config.cf_home, Some(PathBuf::from("/home/op")));
    }

    #[test]
    fn test_endpoint_override_used_verbatim() {
        let config = Config {
            endpoint_override: Some("not even a url".to_string()),
            ..Config::default()
        };
        let endpoint = config
            .log_cache_endpoint(|| panic!("api endpoint must not be consulted"))
            .unwrap();
        assert_eq!(endpoint, "not even a url");
    }

    #[test]
    fn test_endpoint_derived_from_api() {
        let config = Config::default();
        let endpoint = config
            .log_cache_endpoint(|| Ok("https://api.sys.api.example.com".to_string()))
            .unwrap();
        assert_eq!(endpoint, "https://log-cache.sys.api.example.com");
    }

    #[test]
    fn test_endpoint_without_api_substring_unchanged() {
        let endpoint = Config::default()
            .log_cache_endpoint(|| Ok("https://cf.example.com".to_string()))
            .unwrap();
        assert_eq!(endpoint, "https://cf.example.com");
    }

    #[test]
    fn test_endpoint_resolution_failure() {
        let err = Config::default()
            .log_cache_endpoint(|| Err(Error::Platform("not logged in".to_string())))
            .unwrap_err();
        assert!(matches!(err, Error::EndpointResolution(_)));
        assert!(err.to_string().contains("not logged in"));
    }
}
