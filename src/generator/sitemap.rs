//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing the hand-picked HTML pages and every
//! published PDF asset for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://cv.vnerd.nl/</loc>
//!     <lastmod>2025-01-01T12:00:00+00:00</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    asset::scan_pdf_assets,
    config::SitemapConfig,
    core::{ChangeFreq, encode_url},
    log,
    utils::mtime::isoformat_mtime,
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::SitemapError;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap and publish it, returning the entry count.
///
/// With `config.stdout` set the document is printed instead of written.
pub fn build_sitemap(config: &SitemapConfig) -> Result<usize> {
    let sitemap = Sitemap::build(config)?;
    let count = sitemap.len();

    if config.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(sitemap.to_xml().as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to print sitemap")?;
    } else {
        sitemap.write(&config.output)?;
        log!("sitemap"; "Wrote {} entries to {}", count, config.output.display());
    }

    Ok(count)
}

#[derive(Debug)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl Sitemap {
    /// Collect pages and PDF assets, sorted by `loc`.
    pub fn build(config: &SitemapConfig) -> Result<Self> {
        let mut urls = Vec::with_capacity(config.pages.len());

        for page in config.pages {
            let source = config.root_join(page.source);
            urls.push(UrlEntry {
                loc: encode_url(&config.base_url, page.url_path)?,
                lastmod: isoformat_mtime(&source)
                    .with_context(|| format!("Failed to read listed page `{}`", page.source))?,
                changefreq: page.changefreq,
                priority: page.priority,
            });
        }

        for asset in scan_pdf_assets(config)? {
            urls.push(UrlEntry {
                loc: encode_url(&config.base_url, &asset.rel_path)?,
                lastmod: asset.lastmod,
                changefreq: asset.changefreq,
                priority: asset.priority,
            });
        }

        Ok(Self::from_entries(urls))
    }

    /// Wrap entries, imposing the `loc` order.
    pub fn from_entries(mut urls: Vec<UrlEntry>) -> Self {
        urls.sort_by(|a, b| a.loc.cmp(&b.loc));
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&escape_xml(&entry.lastmod));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Overwrite `path` with the serialized document.
    pub fn write(&self, path: &Path) -> Result<(), SitemapError> {
        let xml = self.to_xml();
        fs::write(path, xml).map_err(|err| SitemapError::Write(path.to_path_buf(), err))
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
