//! Filename sanitization for uploaded attachments.

/// Reduce a client-supplied filename to a safe flat storage key.
///
/// Drops any directory components (both separator styles), maps characters
/// outside `[A-Za-z0-9._-]` to `_`, and trims leading/trailing dots so the
/// result can never escape the upload directory or hide as a dotfile.
/// Returns an empty string when nothing safe remains; callers must treat
/// that as a validation failure.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_matches('.').to_string()
}
