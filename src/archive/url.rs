//! Archive URL construction and parsing.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use super::{Checkpoint, Snapshot};

/// Public SPC server
pub const DEFAULT_ARCHIVE_BASE: &str = "https://www.spc.noaa.gov";

const FILE_PREFIX: &str = "day1otlk_";
const FILE_SUFFIX: &str = "_cat.lyr.geojson";

/// Build the categorical layer URL for a snapshot.
///
/// `base` is scheme plus host, e.g. `https://www.spc.noaa.gov`.
pub fn snapshot_url(base: &str, snapshot: &Snapshot) -> String {
    let date = snapshot.date;
    format!(
        "{}/products/outlook/archive/{}/{}{}{:02}{:02}_{}{}",
        base.trim_end_matches('/'),
        date.year(),
        FILE_PREFIX,
        date.year(),
        date.month(),
        date.day(),
        snapshot.checkpoint.label,
        FILE_SUFFIX
    )
}

impl Snapshot {
    pub fn url(&self, base: &str) -> String {
        snapshot_url(base, self)
    }

    /// Recover the snapshot from an archive URL
    pub fn from_url(url: &str) -> Result<Snapshot> {
        let parsed = ::url::Url::parse(url).with_context(|| format!("Invalid URL '{}'", url))?;

        let file_name = parsed
            .path_segments()
            .and_then(|segments| segments.last())
            .with_context(|| format!("URL '{}' has no file name", url))?;

        let stem = file_name
            .strip_prefix(FILE_PREFIX)
            .and_then(|s| s.strip_suffix(FILE_SUFFIX))
            .with_context(|| format!("'{}' is not a day 1 categorical outlook", file_name))?;

        let (date, label) = stem
            .split_once('_')
            .with_context(|| format!("'{}' has no checkpoint", file_name))?;

        let date = NaiveDate::parse_from_str(date, "%Y%m%d")
            .with_context(|| format!("Invalid archive date '{}'", date))?;
        let checkpoint = Checkpoint::from_label(label)
            .with_context(|| format!("Unknown checkpoint '{}'", label))?;

        Ok(Snapshot { date, checkpoint })
    }
}
