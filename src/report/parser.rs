//! Text report parser
//!
//! Turns the discovery tool's human-oriented output into ordered entries. The
//! report alternates a name line (`owner/repo@skill ...`) with a reference line
//! whose last word is the skill page URL.

use crate::report::ansi::strip_ansi;

/// Substring that marks a reference line
const URL_LINE_MARKER: &str = "skills.sh/";

/// Installation hints contain `@` and `/` too but are never names
const INSTALL_HINT: &str = "Install with";

/// One discovered item awaiting enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The full (trimmed, color-free) name line
    pub name: String,

    /// Reference page URL
    pub url: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Parses a raw report into entries, in discovery order
///
/// # Parsing Rules
///
/// 1. Strip ANSI color sequences
/// 2. Trim every line and drop blank ones
/// 3. A line containing both `@` and `/` (and not an install hint) is a name line
/// 4. Its URL is the last word of the first later line containing `skills.sh/`
/// 5. Name lines with no later reference line are discarded
///
/// Each name line scans forward on its own, so two name lines in a row share
/// the next reference line.
///
/// # Examples
///
/// ```
/// use skill_scout::report::parse_report;
///
/// let report = "acme/tools@1.0.0 some/path\n└ https://skills.sh/acme/tools/build\n";
/// let entries = parse_report(report);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].url, "https://skills.sh/acme/tools/build");
/// ```
pub fn parse_report(raw: &str) -> Vec<Entry> {
    let cleaned = strip_ansi(raw);
    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !is_name_line(line) {
            continue;
        }

        match find_url_after(&lines[i + 1..]) {
            Some(url) => entries.push(Entry::new(*line, url)),
            None => tracing::trace!("No reference line after {:?}, skipping", line),
        }
    }

    tracing::debug!("Parsed {} entries from {} lines", entries.len(), lines.len());
    entries
}

fn is_name_line(line: &str) -> bool {
    line.contains('@') && line.contains('/') && !line.contains(INSTALL_HINT)
}

/// Returns the last word of the first reference line in `rest`
// Unbounded: a trailing name line with no reference costs one pass over `rest`.
fn find_url_after<'a>(rest: &[&'a str]) -> Option<&'a str> {
    rest.iter()
        .find(|line| line.contains(URL_LINE_MARKER))
        .and_then(|line| line.split_whitespace().last())
}
