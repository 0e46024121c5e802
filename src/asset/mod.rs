//! Asset discovery for the sitemap.

mod scan;

pub use scan::scan_pdf_assets;
