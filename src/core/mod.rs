//! Core sitemap types shared across scanning and generation.

mod changefreq;
mod url;

pub use changefreq::ChangeFreq;
pub use self::url::encode_url;
