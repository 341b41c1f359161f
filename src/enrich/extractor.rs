//! Description extraction from HTML bodies
//!
//! Extraction is an ordered chain of [`DescriptionStrategy`] implementations;
//! the first strategy that produces non-empty text wins. The heuristics are
//! deliberately shallow pattern matches rather than a DOM walk: skill pages put
//! the summary either in the first paragraph of their `prose` content block or
//! in the page's meta description.

use crate::enrich::text::{collapse_whitespace, decode_entities, strip_tags};
use regex::Regex;
use std::sync::LazyLock;

/// Marker substring of the content block holding the skill summary
const PROSE_MARKER: &str = "prose";

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("hardcoded regex pattern is valid")
});

/// Meta description patterns, in preference order
static META_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r#"(?i)<meta[^>]+name="description"[^>]+content="([^"]+)""#,
        r#"(?i)<meta[^>]+property="og:description"[^>]+content="([^"]+)""#,
        r#"(?i)<meta[^>]+name='description'[^>]+content='([^']+)'"#,
        r#"(?i)<meta[^>]+property='og:description'[^>]+content='([^']+)'"#,
    ]
    .map(|pattern| Regex::new(pattern).expect("hardcoded regex pattern is valid"))
});

/// One way of finding a description in a page
pub trait DescriptionStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Returns cleaned, non-empty text or `None`
    fn extract(&self, html: &str) -> Option<String>;
}

/// First `<p>` at or after the `prose` marker (or anywhere, without a marker)
#[derive(Debug, Clone, Copy, Default)]
pub struct ProseParagraph;

impl DescriptionStrategy for ProseParagraph {
    fn name(&self) -> &'static str {
        "prose-paragraph"
    }

    fn extract(&self, html: &str) -> Option<String> {
        let start = html.find(PROSE_MARKER).unwrap_or(0);
        let inner = PARAGRAPH.captures(&html[start..])?.get(1)?.as_str();

        let text = collapse_whitespace(&decode_entities(&strip_tags(inner)));
        (!text.is_empty()).then_some(text)
    }
}

/// `content` of `<meta name="description">` or `<meta property="og:description">`
///
/// Only the first pattern that matches is used; blank content there means no
/// description, even if a later pattern would match.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaDescription;

impl DescriptionStrategy for MetaDescription {
    fn name(&self) -> &'static str {
        "meta-description"
    }

    fn extract(&self, html: &str) -> Option<String> {
        let captures = META_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(html))?;
        let text = collapse_whitespace(&decode_entities(captures.get(1)?.as_str()));
        (!text.is_empty()).then_some(text)
    }
}

/// Ordered strategy chain
pub struct Extractor {
    strategies: Vec<Box<dyn DescriptionStrategy>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![Box::new(ProseParagraph), Box::new(MetaDescription)])
    }
}

impl Extractor {
    pub fn new(strategies: Vec<Box<dyn DescriptionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Runs the chain, returning the first description found
    pub fn extract(&self, html: &str) -> Option<String> {
        self.strategies.iter().find_map(|strategy| {
            let found = strategy.extract(html);
            if found.is_some() {
                tracing::trace!("Description found by {}", strategy.name());
            }
            found
        })
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}
