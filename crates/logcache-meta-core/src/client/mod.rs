//! Collaborators the report pipeline talks to.
//!
//! Each concern sits behind a trait so the pipeline can run against
//! in-memory fakes. The HTTP implementations live in the submodules.

pub mod capi;
pub mod http;
pub mod logcache;
pub mod uaa;

use std::time::SystemTime;

use crate::correlate::App;
use crate::error::Result;
use crate::meta::{MetaMap, SourceId};

pub use capi::CapiClient;
pub use http::HttpClient;
pub use logcache::LogCacheClient;
pub use uaa::UaaClient;

/// Source of per-source retention metadata.
pub trait MetaSource {
    fn meta(&self) -> Result<MetaMap>;
}

/// Resolves source ids to application names.
pub trait AppDirectory {
    /// Return the applications among `ids`. Unknown ids are simply absent.
    fn resolve(&self, ids: &[SourceId]) -> Result<Vec<App>>;
}

/// Who is asking.
pub trait Identity {
    fn username(&self) -> Result<String>;
}

/// Reads the log lines a source emitted in `[start, end)`.
pub trait Tailer {
    fn tail(&self, source_id: &str, start: SystemTime, end: SystemTime) -> Result<Vec<String>>;
}
