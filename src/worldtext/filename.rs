//! Filename sanitization for generated bitmaps and materials.

use regex::Regex;
use std::sync::LazyLock;

/// Used when sanitizing leaves nothing behind.
pub const DEFAULT_FILENAME: &str = "point_worldtext";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("invalid regex"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").expect("invalid regex"));

/// Turn arbitrary text into a resource-safe file stem.
///
/// Whitespace runs become `_`, anything outside `[A-Za-z0-9_]` is dropped,
/// repeated underscores collapse, and the ends are trimmed. Case is kept.
/// The result is never empty.
pub fn sanitize_filename(text: &str) -> String {
    sanitize_stem(text).unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

/// Like [`sanitize_filename`], but `None` when nothing usable is left.
pub fn sanitize_stem(text: &str) -> Option<String> {
    let spaced = WHITESPACE.replace_all(text.trim(), "_");
    let stripped = DISALLOWED.replace_all(&spaced, "");
    let collapsed = UNDERSCORES.replace_all(&stripped, "_");
    let name = collapsed.trim_matches('_');
    (!name.is_empty()).then(|| name.to_string())
}
