//! Heuristic HTML version detection
//!
//! The detector pattern-matches known doctype declarations against the
//! leading bytes of the raw document. This is explicitly a heuristic, not a
//! compliant SGML/DOCTYPE parse: non-standard doctype formatting can produce
//! false negatives, which is accepted.

/// Number of leading bytes inspected for a doctype declaration
const DOCTYPE_SCAN_WINDOW: usize = 1024;

/// Ordered (pattern, version label) table, matched lowercase
///
/// Public identifiers come before the bare HTML5 doctype so that a legacy
/// declaration is never shadowed by the shorter pattern. Extending the table
/// requires no caller changes.
const DOCTYPE_PATTERNS: &[(&str, &str)] = &[
    ("-//w3c//dtd html 4.01 transitional//en", "HTML 4.01 Transitional"),
    ("-//w3c//dtd html 4.01 frameset//en", "HTML 4.01 Frameset"),
    ("-//w3c//dtd html 4.01//en", "HTML 4.01"),
    ("-//w3c//dtd xhtml 1.0 strict//en", "XHTML 1.0 Strict"),
    ("-//w3c//dtd xhtml 1.0 transitional//en", "XHTML 1.0 Transitional"),
    ("-//w3c//dtd xhtml 1.0 frameset//en", "XHTML 1.0 Frameset"),
    ("-//w3c//dtd xhtml 1.1//en", "XHTML 1.1"),
    ("<!doctype html>", "HTML5"),
];

/// Detects the HTML version from the raw document bytes
///
/// Returns `"Unknown"` when no recognized doctype pattern matches.
pub fn detect_html_version(raw: &[u8]) -> &'static str {
    let window = &raw[..raw.len().min(DOCTYPE_SCAN_WINDOW)];
    let head = String::from_utf8_lossy(window).to_lowercase();

    for (pattern, label) in DOCTYPE_PATTERNS {
        if head.contains(pattern) {
            return label;
        }
    }

    "Unknown"
}
