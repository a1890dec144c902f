//! Remote filename derivation.
//!
//! The acquire stage first saves a download under the name the URL suggests
//! (the last path segment), sanitized for Linux filesystems, before renaming
//! it to the user-chosen name.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives a safe local filename from the URL path.
///
/// The result is sanitized for Linux (no `/`, NUL, or control chars; no
/// leading/trailing dots or spaces; reserved names like "." or ".."
/// replaced).
///
/// # Examples
///
/// - `remote_filename("https://example.com/archive.zip")` → `"archive.zip"`
/// - `remote_filename("https://example.com/")` → `"download.bin"`
pub fn remote_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_filename_from_url_path() {
        assert_eq!(
            remote_filename("https://example.com/archive.zip"),
            "archive.zip"
        );
        assert_eq!(
            remote_filename("http://dump.onion/leaks/2024/payload.zip"),
            "payload.zip"
        );
    }

    #[test]
    fn remote_filename_empty_url_path_fallback() {
        assert_eq!(remote_filename("https://example.com/"), "download.bin");
        assert_eq!(remote_filename("https://example.com"), "download.bin");
    }

    #[test]
    fn remote_filename_reserved_names_fallback() {
        assert_eq!(remote_filename("https://example.com/."), "download.bin");
        assert_eq!(remote_filename("https://example.com/.."), "download.bin");
    }

    #[test]
    fn remote_filename_is_sanitized() {
        assert_eq!(
            remote_filename("https://example.com/weird%20name").as_str(),
            // Percent-encoding survives (the url crate does not decode paths
            // for us), but raw spaces would be replaced.
            "weird%20name"
        );
    }
}
