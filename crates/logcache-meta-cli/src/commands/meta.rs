//! `logcache-meta` — per-source retention report.

use std::path::PathBuf;

use logcache_meta_core::client::{CapiClient, LogCacheClient, UaaClient};
use logcache_meta_core::{
    Config, Error, Pipeline, PlatformSession, ReportOptions, Result, Scope,
};

/// Run the report, exiting on the first failure.
pub fn run(scope: &str, noise: bool) {
    if let Err(e) = report(scope, noise, &Config::from_env()) {
        super::fatal(e);
    }
}

fn report(scope: &str, noise: bool, config: &Config) -> Result<()> {
    let options = ReportOptions {
        scope: Scope::parse(scope)?,
        noise,
        ..ReportOptions::default()
    };

    let session = PlatformSession::load(&cf_home(config)?)?;
    let endpoint = config.log_cache_endpoint(|| session.api_endpoint())?;
    log::debug!("log-cache endpoint {endpoint}, scope {}", options.scope);

    let token = (!config.skip_auth).then(|| session.access_token().to_string());
    let log_cache = LogCacheClient::new(&endpoint, token);
    let capi = CapiClient::new(&session.api_endpoint()?, session.access_token());
    let uaa = UaaClient::new(session.uaa_endpoint(), session.access_token());

    let pipeline = Pipeline {
        meta: &log_cache,
        directory: &capi,
        identity: &uaa,
        tailer: &log_cache,
    };
    pipeline.run(&mut std::io::stdout().lock(), &options)
}

fn cf_home(config: &Config) -> Result<PathBuf> {
    config
        .cf_home
        .clone()
        .ok_or_else(|| Error::Platform("neither CF_HOME nor HOME is set".to_string()))
}
