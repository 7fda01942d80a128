/*!
 * Cleanup of raw provider output.
 *
 * Models sometimes wrap the sentence in quotes or pad it with whitespace
 * despite the directive. This is a best-effort cleanup, not an unescape:
 * quotes inside the sentence are left alone.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A whole string wrapped in one matching pair of `"` or `'`
static SURROUNDING_QUOTES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)\A(?:"(.*)"|'(.*)')\z"#).unwrap()
});

const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Trim whitespace and strip surrounding quotes
///
/// Matching quote pairs are stripped until none is left, so `"  'hi'  "`
/// becomes `hi`. A lone leading or trailing quote left after that is
/// stripped once, so `"abc` and `abc'` both become `abc`.
pub fn clean_response(raw: &str) -> String {
    let text = strip_matching_pairs(raw);

    let text = text.strip_prefix(QUOTE_CHARS).unwrap_or(text);
    let text = text.strip_suffix(QUOTE_CHARS).unwrap_or(text);

    // Dropping a lone quote can expose a new pair, e.g. `"'a''`
    strip_matching_pairs(text).to_string()
}

fn strip_matching_pairs(text: &str) -> &str {
    let mut text = text.trim();

    while let Some(inner) = strip_surrounding_quotes(text) {
        text = inner.trim();
    }

    text
}

fn strip_surrounding_quotes(text: &str) -> Option<&str> {
    let captures = SURROUNDING_QUOTES_REGEX.captures(text)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}
