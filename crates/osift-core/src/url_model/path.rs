//! Last-path-segment extraction, the equivalent of `basename "$URL"`.

/// Extracts the last non-empty path segment from a URL.
///
/// Returns `None` for unparseable URLs and for root or empty paths. Query
/// strings and fragments are not part of the path and never leak into the
/// name.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path()
        .split('/')
        .rev()
        .find(|s| !s.is_empty())?
        .to_string();
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment)
}
