//! Linux-safe filename sanitization.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

fn is_unsafe(c: char) -> bool {
    c == '\0' || c == '/' || c == '\\' || c == ' ' || c == '\t' || c.is_control()
}

/// Sanitizes a candidate filename for safe use on Linux.
///
/// Unsafe characters (NUL, slashes, whitespace, control chars) become `_`,
/// runs of `_` collapse to one, leading/trailing dots and underscores are
/// trimmed, and the result is capped at NAME_MAX bytes on a char boundary.
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_unsafe(c) {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
