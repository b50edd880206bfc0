/// Filename used when nothing safe remains after sanitizing.
pub const FALLBACK_FILENAME: &str = "upload";

/// Reduces an uploaded filename to a safe ASCII basename.
///
/// Path separators become spaces so directory components cannot escape, non-ASCII
/// characters are dropped, whitespace runs become `_` and only `[A-Za-z0-9._-]` is kept.
/// Leading and trailing dots and underscores are stripped.
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .filter(char::is_ascii)
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}
