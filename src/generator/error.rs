//! Sitemap generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting or writing sitemap entries
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("cannot read modification time of `{0}`")]
    Mtime(PathBuf, #[source] std::io::Error),

    #[error("cannot scan `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("cannot build URL for `{0}`")]
    Url(String, #[source] url::ParseError),

    #[error("cannot write sitemap to `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
