//! PDF asset scanning (pure, no side effects).

use jwalk::WalkDir;
use std::path::Path;

use crate::config::SitemapConfig;
use crate::core::ChangeFreq;
use crate::debug;
use crate::generator::SitemapError;
use crate::utils::mtime::isoformat_mtime;

/// Priority assigned to every discovered PDF
pub const PDF_PRIORITY: f32 = 0.5;

/// A discovered PDF, not yet turned into a URL
#[derive(Debug, Clone, PartialEq)]
pub struct PdfAsset {
    /// Root-relative path with `/` separators
    pub rel_path: String,
    pub lastmod: String,
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

/// Check a root-relative path against plain string prefixes
///
/// No glob or regex semantics: `resrc/Temp/` excludes `resrc/Temp/a.pdf`
/// but not `resrc/Temporary.pdf`.
pub fn is_excluded(rel_path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| rel_path.starts_with(prefix))
}

/// Render `path` relative to `root` with forward slashes
fn relative_slash_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Scan the resource directory for PDF assets
///
/// Returns every `*.pdf` file (case-sensitive extension) below
/// `config.resource_root()` that is not excluded, with its mtime.
/// A missing resource directory yields an empty list.
///
/// ```text
/// resrc/
/// ├── cv.pdf              -> resrc/cv.pdf
/// ├── certs/
/// │   └── aws.pdf         -> resrc/certs/aws.pdf
/// └── Temp/
///     └── draft.pdf       -> (excluded)
/// ```
///
/// Order is whatever the walk produced; callers sort.
pub fn scan_pdf_assets(config: &SitemapConfig) -> Result<Vec<PdfAsset>, SitemapError> {
    let resource_root = config.resource_root();
    if !resource_root.is_dir() {
        debug!("scan"; "{} not found, no PDF assets", resource_root.display());
        return Ok(vec![]);
    }

    let mut results = Vec::new();

    // Dot-files are published too; a symlink counts unless it resolves to a directory
    for entry in WalkDir::new(&resource_root).skip_hidden(false) {
        let entry = entry.map_err(|err| SitemapError::Walk(resource_root.clone(), err))?;
        let file_type = entry.file_type();
        let path = entry.path();
        if !(file_type.is_file() || (file_type.is_symlink() && !path.is_dir())) {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("pdf") {
            continue;
        }

        let rel_path = relative_slash_path(&path, &config.root);
        // Directory-style and exact-path prefixes are matched separately
        if is_excluded(&format!("{rel_path}/"), config.exclude_prefixes)
            || is_excluded(&rel_path, config.exclude_prefixes)
        {
            debug!("scan"; "excluded {}", rel_path);
            continue;
        }

        debug!("scan"; "found {}", rel_path);
        results.push(PdfAsset {
            lastmod: isoformat_mtime(&path)?,
            rel_path,
            priority: PDF_PRIORITY,
            changefreq: ChangeFreq::Yearly,
        });
    }

    Ok(results)
}
