//! Plain-text rendering of enriched entries

use crate::enrich::EnrichedEntry;
use std::io::{self, Write};

/// Printed instead of entries when the report held none
pub const NO_SKILLS_FOUND: &str = "No skills found.";

/// Writes each entry as name, `└ url`, description, then a blank line
///
/// # Example
///
/// ```
/// use skill_scout::enrich::{EnrichedEntry, Enrichment};
/// use skill_scout::output::render_entries;
/// use skill_scout::Entry;
///
/// let entries = vec![EnrichedEntry::new(
///     Entry::new("acme/tools@1.0.0", "https://skills.sh/acme/tools/build"),
///     Enrichment::skipped(),
/// )];
/// let mut out = Vec::new();
/// render_entries(&mut out, &entries).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "acme/tools@1.0.0\n└ https://skills.sh/acme/tools/build\n[description skipped]\n\n"
/// );
/// ```
pub fn render_entries<W: Write>(out: &mut W, entries: &[EnrichedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.name)?;
        writeln!(out, "└ {}", entry.url)?;
        writeln!(out, "{}", entry.description())?;
        writeln!(out)?;
    }
    out.flush()
}

/// Writes the single "nothing found" line
pub fn render_empty<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", NO_SKILLS_FOUND)?;
    out.flush()
}
