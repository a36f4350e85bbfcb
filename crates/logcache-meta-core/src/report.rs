//! End-to-end report: fetch, bound, resolve, correlate, sample, render.
//!
//! Stages run strictly in sequence and the first error aborts the run before
//! anything is written.

use std::io::Write;
use std::time::SystemTime;

use crate::client::{AppDirectory, Identity, MetaSource, Tailer};
use crate::correlate::{ReportRow, correlate};
use crate::error::Result;
use crate::meta::{MAX_SOURCES, SourceId, truncate};
use crate::rate::sample_rates;
use crate::scope::Scope;
use crate::table::render;

/// Knobs chosen by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub scope: Scope,
    /// Sample the last minute of lines per row and add a `Rate` column.
    pub noise: bool,
    /// Cap on sources carried into directory resolution.
    pub max_sources: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            scope: Scope::All,
            noise: false,
            max_sources: MAX_SOURCES,
        }
    }
}

/// The collaborators one report run talks to.
pub struct Pipeline<'a> {
    pub meta: &'a dyn MetaSource,
    pub directory: &'a dyn AppDirectory,
    pub identity: &'a dyn Identity,
    pub tailer: &'a dyn Tailer,
}

impl Pipeline<'_> {
    /// Fetch, truncate, resolve and correlate, without rate samples.
    pub fn correlated(&self, options: &ReportOptions) -> Result<Vec<ReportRow>> {
        let meta = truncate(options.max_sources, self.meta.meta()?);
        let ids: Vec<SourceId> = meta.keys().cloned().collect();
        let apps = self.directory.resolve(&ids)?;
        Ok(correlate(&meta, &apps, options.scope))
    }

    /// Build the report and write it to `out`.
    pub fn run<W: Write>(&self, out: &mut W, options: &ReportOptions) -> Result<()> {
        let mut rows = self.correlated(options)?;
        let username = self.identity.username()?;
        if options.noise {
            sample_rates(&mut rows, self.tailer, SystemTime::now)?;
        }
        render(out, &username, &rows, options.noise)
    }
}
