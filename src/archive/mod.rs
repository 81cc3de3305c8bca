//! SPC outlook archive access.
//!
//! Maps a query time to the most recent published day 1 outlook, builds the
//! archive URL for it and downloads the categorical layer.

mod checkpoint;
mod fetcher;
mod url;

pub use checkpoint::{parse_query_time, resolve_snapshot, Checkpoint, Snapshot, CHECKPOINTS};
pub use self::url::{snapshot_url, DEFAULT_ARCHIVE_BASE};
pub use fetcher::{FetchOptions, OutlookFetcher};
