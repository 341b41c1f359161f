//! ANSI color-code removal

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// SGR sequences: ESC `[`, digits or semicolons, then `m`
static ANSI_SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("hardcoded regex pattern is valid"));

/// Removes ANSI color sequences from `text`
///
/// Borrows when there is nothing to strip. Removal repeats until no sequence
/// is left, since deleting an inner sequence can splice a new one together
/// (`ESC[ESC[31mm`), which keeps stripping idempotent.
///
/// # Examples
///
/// ```
/// use skill_scout::report::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[1;32mok\x1b[0m"), "ok");
/// ```
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let mut stripped = ANSI_SGR.replace_all(text, "");
    while ANSI_SGR.is_match(&stripped) {
        stripped = Cow::Owned(ANSI_SGR.replace_all(&stripped, "").into_owned());
    }
    stripped
}
