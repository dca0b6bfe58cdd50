use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static RANK_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(Rank(?:ed|ing)?)\b").unwrap());

/// Marker the site appends to every collapsible header label.
const HEADER_MARKER: &str = "[+]";

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleanup for a stat's primary value cell. Steps run once, in this order:
/// drop tab/CR/LF, collapse space runs, separate an embedded rank marker.
pub fn clean_quantity(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect();
    let collapsed = SPACE_RUN_RE.replace_all(&stripped, " ");
    let separated = RANK_MARKER_RE.replace_all(&collapsed, ", $1");
    separated.trim().trim_start_matches(", ").trim().to_string()
}

/// Dispatch key for a panel header: `"LAND FORCES [+]"` → `"land forces"`.
pub fn header_key(header_text: &str) -> String {
    let text = normalize_ws(header_text);
    let text = text.strip_suffix(HEADER_MARKER).unwrap_or(&text);
    text.trim().to_lowercase()
}

/// Descriptive labels are reported lower-cased.
pub fn label(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Value after the first `:` of a `"Key: value"` line, trimmed.
pub fn value_after_colon(s: &str) -> Option<String> {
    s.split_once(':').map(|(_, v)| v.trim().to_string())
}

/// Three-letter month key: `"January"` → `"Jan"`.
pub fn month_key(s: &str) -> String {
    s.trim().chars().take(3).collect()
}

// ── Tests ──
