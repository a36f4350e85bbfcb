//! # logcache-meta-core
//!
//! What is log-cache holding right now, per source?
//!
//! Fetches per-source retention metadata from log-cache, caps it at
//! [`MAX_SOURCES`] entries, names application sources through the platform
//! API and renders an aligned table, optionally with a one-minute line count
//! per source.
//!
//! ## Architecture
//!
//! MetaSource → truncate → AppDirectory → correlate → (Tailer) → table
//!
//! Sources split three ways:
//! - **Named applications**: resolved by the directory, in directory order.
//! - **Unnamed applications**: GUID-shaped ids the directory did not know.
//! - **Platform**: everything else.
//!
//! The operator's [`Scope`] decides which of those groups are printed.
//!
//! ```no_run
//! use logcache_meta_core::{Config, Pipeline, PlatformSession, ReportOptions};
//! use logcache_meta_core::client::{CapiClient, LogCacheClient, UaaClient};
//!
//! # fn main() -> logcache_meta_core::Result<()> {
//! let session = PlatformSession::load(std::path::Path::new("/home/me"))?;
//! let endpoint = Config::default().log_cache_endpoint(|| session.api_endpoint())?;
//! let log_cache = LogCacheClient::new(&endpoint, Some(session.access_token().to_string()));
//! let capi = CapiClient::new(&session.api_endpoint()?, session.access_token());
//! let uaa = UaaClient::new(session.uaa_endpoint(), session.access_token());
//!
//! let pipeline = Pipeline {
//!     meta: &log_cache,
//!     directory: &capi,
//!     identity: &uaa,
//!     tailer: &log_cache,
//! };
//! pipeline.run(&mut std::io::stdout(), &ReportOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod correlate;
pub mod error;
pub mod meta;
pub mod platform;
pub mod rate;
pub mod report;
pub mod scope;
pub mod table;

pub use config::Config;
pub use correlate::{App, ReportRow, correlate, is_app_like};
pub use error::{Error, Result};
pub use meta::{MAX_SOURCES, MetaInfo, MetaMap, SourceId, format_duration, truncate};
pub use platform::PlatformSession;
pub use rate::{RATE_WINDOW, sample_rate, sample_rates};
pub use report::{Pipeline, ReportOptions};
pub use scope::Scope;
pub use table::render;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
