//! Joins log-cache metadata with the application directory and splits the
//! result into named applications, unnamed applications and platform sources.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use crate::meta::{MetaInfo, MetaMap, SourceId};
use crate::scope::Scope;

/// Shape of an application GUID (8-4-4-4-12 lowercase hex).
static GUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("GUID pattern is valid")
});

/// Whether a source id looks like it belongs to an application.
pub fn is_app_like(source_id: &str) -> bool {
    GUID_PATTERN.is_match(source_id)
}

/// Application known to the platform inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct App {
    pub guid: SourceId,
    pub name: String,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub source_id: SourceId,
    /// Empty unless the directory resolved the source.
    pub app_name: String,
    pub count: i64,
    pub expired: i64,
    pub cache_duration: Duration,
    /// Lines seen in the last minute; only set when sampling is enabled.
    pub rate: Option<usize>,
}

/// Merge metadata with resolved names, filtered by `scope`.
///
/// Rows come out in three groups: named applications in directory order,
/// then unnamed GUID-shaped sources, then platform sources, the last two
/// ordered by source id. A directory match always wins over the GUID
/// pattern, and directory entries with no metadata are skipped.
pub fn correlate(meta: &MetaMap, apps: &[App], scope: Scope) -> Vec<ReportRow> {
    let mut consumed: HashSet<&str> = HashSet::with_capacity(apps.len());
    let mut rows = Vec::with_capacity(meta.len());

    for app in apps {
        let Some(info) = meta.get(&app.guid) else {
            continue;
        };
        if !consumed.insert(app.guid.as_str()) {
            continue;
        }
        if scope.includes_applications() {
            rows.push(row(&app.guid, &app.name, info));
        }
    }

    let mut platform = Vec::new();
    for (source_id, info) in meta {
        if consumed.contains(source_id.as_str()) {
            continue;
        }
        if is_app_like(source_id) {
            if scope.includes_applications() {
                rows.push(row(source_id, "", info));
            }
        } else if scope.includes_platform() {
            platform.push(row(source_id, "", info));
        }
    }
    rows.extend(platform);

    log::debug!(
        "correlated {} sources against {} apps: {} rows for scope {scope}",
        meta.len(),
        apps.len(),
        rows.len()
    );
    rows
}

fn row(source_id: &str, name: &str, info: &MetaInfo) -> ReportRow {
    ReportRow {
        source_id: source_id.to_string(),
        app_name: name.to_string(),
        count: info.count,
        expired: info.expired,
        cache_duration: info.cache_duration(),
        rate: None,
    }
}
