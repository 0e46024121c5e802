//! Modification-time lookup for sitemap `<lastmod>` values.

use std::path::Path;
use std::time::SystemTime;

use super::date::DateTimeUtc;
use crate::generator::SitemapError;

/// Get the modification time of a file
///
/// Unlike a freshness probe, a missing file is an error here: every
/// sitemap entry must be backed by a file on disk.
pub fn get_mtime(path: &Path) -> Result<SystemTime, SitemapError> {
    path.metadata()
        .and_then(|m| m.modified())
        .map_err(|err| SitemapError::Mtime(path.to_path_buf(), err))
}

/// Modification time as `YYYY-MM-DDTHH:MM:SS+00:00`
pub fn isoformat_mtime(path: &Path) -> Result<String, SitemapError> {
    let mtime = get_mtime(path)?;
    let dt = DateTimeUtc::from_system_time(mtime).ok_or_else(|| {
        SitemapError::Mtime(
            path.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "timestamp out of range"),
        )
    })?;
    Ok(dt.to_iso8601())
}
