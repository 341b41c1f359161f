//! Fallback URL derivation
//!
//! Skill pages on the source host have a mirror that is tried once when the
//! primary page yields no description.

use crate::config::FallbackConfig;
use regex::Regex;

/// Maps `http(s)://<source-host>/<owner>/<repo>/<skill>...` to
/// `<base-url>/<owner>/<repo>/<skill>`
#[derive(Debug, Clone)]
pub struct FallbackResolver {
    pattern: Regex,
    base_url: String,
}

impl Default for FallbackResolver {
    fn default() -> Self {
        let config = FallbackConfig::default();
        Self::new(&config.source_host, &config.base_url)
    }
}

impl FallbackResolver {
    pub fn new(source_host: &str, base_url: &str) -> Self {
        let pattern = Regex::new(&format!(
            r"^https?://{}/([^/]+)/([^/]+)/([^/]+)",
            regex::escape(source_host)
        ))
        .expect("escaped host always yields a valid pattern");

        Self {
            pattern,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FallbackConfig) -> Self {
        Self::new(&config.source_host, &config.base_url)
    }

    /// Returns the mirror URL for `url`, or `None` if it has no mirror
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_scout::enrich::FallbackResolver;
    ///
    /// let resolver = FallbackResolver::default();
    /// assert_eq!(
    ///     resolver.derive_alternate("https://skills.sh/acme/tools/build").as_deref(),
    ///     Some("https://agent-skills.md/skills/acme/tools/build")
    /// );
    /// assert_eq!(resolver.derive_alternate("https://example.com/a/b/c"), None);
    /// ```
    pub fn derive_alternate(&self, url: &str) -> Option<String> {
        let caps = self.pattern.captures(url)?;
        Some(format!(
            "{}/{}/{}/{}",
            self.base_url, &caps[1], &caps[2], &caps[3]
        ))
    }
}
