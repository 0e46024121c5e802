//! Absolute URL construction for sitemap `<loc>` values.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::generator::SitemapError;

/// Characters left as-is in a path: unreserved marks plus the separator.
const PATH_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a root-relative path, keeping `/` separators.
pub fn encode_path(rel_path: &str) -> String {
    utf8_percent_encode(rel_path, PATH_SAFE).to_string()
}

/// Join the site origin with a percent-encoded relative path.
///
/// ```ignore
/// encode_url(&base, "")                   -> "https://cv.vnerd.nl/"
/// encode_url(&base, "resrc/My CV.pdf")    -> "https://cv.vnerd.nl/resrc/My%20CV.pdf"
/// ```
pub fn encode_url(base: &Url, rel_path: &str) -> Result<String, SitemapError> {
    let encoded = encode_path(rel_path);
    base.join(&encoded)
        .map(String::from)
        .map_err(|err| SitemapError::Url(rel_path.to_string(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://cv.vnerd.nl/").unwrap()
    }

    #[test]
    fn test_encode_url_root() {
        assert_eq!(encode_url(&base(), "").unwrap(), "https://cv.vnerd.nl/");
    }

    #[test]
    fn test_encode_url_keeps_separators() {
        assert_eq!(
            encode_url(&base(), "resrc/docs/cv.pdf").unwrap(),
            "https://cv.vnerd.nl/resrc/docs/cv.pdf"
        );
    }

    #[test]
    fn test_encode_url_escapes_segments() {
        assert_eq!(
            encode_url(&base(), "resrc/My CV (2024).pdf").unwrap(),
            "https://cv.vnerd.nl/resrc/My%20CV%20%282024%29.pdf"
        );
        assert_eq!(
            encode_url(&base(), "resrc/a&b#c?.pdf").unwrap(),
            "https://cv.vnerd.nl/resrc/a%26b%23c%3F.pdf"
        );
    }

    #[test]
    fn test_encode_url_non_ascii() {
        assert_eq!(
            encode_url(&base(), "resrc/résumé.pdf").unwrap(),
            "https://cv.vnerd.nl/resrc/r%C3%A9sum%C3%A9.pdf"
        );
    }

    #[test]
    fn test_encode_path_unreserved_untouched() {
        assert_eq!(encode_path("a-b_c.d~e/f"), "a-b_c.d~e/f");
    }

    #[test]
    fn test_encode_url_is_injective() {
        let paths = [
            "resrc/a b.pdf",
            "resrc/a%20b.pdf",
            "resrc/a+b.pdf",
            "resrc/a%2Bb.pdf",
            "resrc/a:b.pdf",
            "resrc/a%3Ab.pdf",
        ];
        let urls: Vec<_> = paths
            .iter()
            .map(|p| encode_url(&base(), p).unwrap())
            .collect();

        for (i, a) in urls.iter().enumerate() {
            for b in &urls[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(urls[1], "https://cv.vnerd.nl/resrc/a%2520b.pdf");
    }
}
