//! Sitemap configuration.
//!
//! The published site layout is fixed at compile time:
//!
//! | Constant           | Purpose                                         |
//! |--------------------|-------------------------------------------------|
//! | `BASE_URL`         | Site origin every `<loc>` is resolved against   |
//! | `HTML_PAGES`       | Hand-picked pages, with priority and changefreq |
//! | `RESOURCE_DIR`     | Subdirectory scanned for PDF assets             |
//! | `EXCLUDE_PREFIXES` | Root-relative prefixes never published          |
//! | `SITEMAP_FILE`     | Default output file name                        |
//!
//! Only the root and output locations are chosen at runtime.

use crate::cli::Cli;
use crate::core::ChangeFreq;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

pub const BASE_URL: &str = "https://cv.vnerd.nl/";

pub const SITEMAP_FILE: &str = "sitemap.xml";

pub const RESOURCE_DIR: &str = "resrc";

/// Root-relative prefixes to skip.
pub const EXCLUDE_PREFIXES: &[&str] = &[
    "resrc/Temp/", // transient or acknowledgement artifacts
];

/// Explicitly listed HTML pages.
pub const HTML_PAGES: &[PageSpec] = &[
    PageSpec {
        url_path: "",
        source: "index.html",
        priority: 1.0,
        changefreq: ChangeFreq::Weekly,
    },
    PageSpec {
        url_path: "badges.html",
        source: "badges.html",
        priority: 0.7,
        changefreq: ChangeFreq::Monthly,
    },
];

/// A page published at `url_path`, dated by the mtime of `source`.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub url_path: &'static str,
    pub source: &'static str,
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Site root; all relative paths are taken against it
    pub root: PathBuf,
    /// Where the document is written
    pub output: PathBuf,
    /// Print to stdout instead of writing `output`
    pub stdout: bool,
    pub base_url: Url,
    pub resource_dir: &'static str,
    pub exclude_prefixes: &'static [&'static str],
    pub pages: &'static [PageSpec],
}

impl SitemapConfig {
    /// Build configuration for `root` with the compiled-in site layout.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let base_url = Url::parse(BASE_URL)
            .with_context(|| format!("Invalid base URL `{BASE_URL}`"))?;

        Ok(Self {
            output: root.join(SITEMAP_FILE),
            root,
            stdout: false,
            base_url,
            resource_dir: RESOURCE_DIR,
            exclude_prefixes: EXCLUDE_PREFIXES,
            pages: HTML_PAGES,
        })
    }

    /// Load configuration from CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current working directory")?,
        };

        let mut config = Self::new(root)?;
        if let Some(output) = &cli.output {
            config.output = config.root_join(output);
        }
        config.stdout = cli.stdout;
        Ok(config)
    }

    /// Join a path onto the site root (absolute paths pass through).
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn resource_root(&self) -> PathBuf {
        self.root_join(self.resource_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = SitemapConfig::new("/site").unwrap();

        assert_eq!(config.output, PathBuf::from("/site/sitemap.xml"));
        assert_eq!(config.resource_root(), PathBuf::from("/site/resrc"));
        assert_eq!(config.base_url.as_str(), "https://cv.vnerd.nl/");
        assert_eq!(config.exclude_prefixes, &["resrc/Temp/"]);
        assert!(!config.stdout);
    }

    #[test]
    fn test_html_pages() {
        assert_eq!(HTML_PAGES.len(), 2);
        assert_eq!(HTML_PAGES[0].url_path, "");
        assert_eq!(HTML_PAGES[0].source, "index.html");
        assert!((HTML_PAGES[0].priority - 1.0).abs() < f32::EPSILON);
        assert_eq!(HTML_PAGES[1].changefreq, ChangeFreq::Monthly);
    }

    #[test]
    fn test_load_output_relative_to_root() {
        let cli = Cli {
            color: clap::ColorChoice::Never,
            root: Some(PathBuf::from("/site")),
            output: Some(PathBuf::from("public/sitemap.xml")),
            stdout: false,
            verbose: false,
        };
        let config = SitemapConfig::load(&cli).unwrap();
        assert_eq!(config.output, PathBuf::from("/site/public/sitemap.xml"));
    }

    #[test]
    fn test_load_absolute_output() {
        let cli = Cli {
            color: clap::ColorChoice::Never,
            root: Some(PathBuf::from("/site")),
            output: Some(PathBuf::from("/tmp/out.xml")),
            stdout: true,
            verbose: false,
        };
        let config = SitemapConfig::load(&cli).unwrap();
        assert_eq!(config.output, PathBuf::from("/tmp/out.xml"));
        assert!(config.stdout);
    }
}
