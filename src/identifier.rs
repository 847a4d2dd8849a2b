use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::IDENTIFIER_PREFIX;

// Letters (Lu, Ll, Lt, Lm, Lo), numbers and underscore survive; marks and symbols do not.
fn non_identifier_char() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\p{L}\p{N}_]").unwrap())
}

/// Builds an array identifier from the input file name.
///
/// The stem is sanitized (anything that is not a letter, number or `_` becomes `_`),
/// lower-cased and prefixed with `font_data_`. Clashes with C keywords or
/// existing symbols are left to the caller.
pub fn derive_array_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let sanitized = non_identifier_char().replace_all(&stem, "_");

    format!("{}{}", IDENTIFIER_PREFIX, sanitized.to_lowercase())
}

/// Explicit identifier wins verbatim, otherwise one is derived from `input`.
pub fn resolve_array_name(explicit: Option<&str>, input: &Path) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => derive_array_name(input),
    }
}
