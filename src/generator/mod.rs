//! Sitemap output generation.
//!
//! Merges the listed HTML pages with scanned PDF assets and serializes
//! them as a sitemaps.org 0.9 document.

mod error;
pub mod sitemap;

pub use error::SitemapError;
pub use sitemap::build_sitemap;
