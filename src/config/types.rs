use serde::Deserialize;

/// Main configuration structure for Skill-Scout
///
/// Every section is optional in the TOML file; missing keys take the defaults
/// the command line documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enrich: EnrichConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub fallback: FallbackConfig,
    pub discovery: DiscoveryConfig,
}

/// Enrichment behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Maximum number of entries to enrich
    #[serde(rename = "max-entries")]
    pub max_entries: usize,

    /// Wall-clock budget for one fetch, redirects included (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Number of parallel enrichment workers
    pub concurrency: usize,

    /// Redirect hops followed before a fetch fails
    #[serde(rename = "max-redirects")]
    pub max_redirects: u32,

    /// Permit plain `http://` pages and redirects; HTTPS only when false
    #[serde(rename = "allow-http")]
    pub allow_http: bool,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            max_entries: 10,
            timeout_secs: 10,
            concurrency: 5,
            max_redirects: 3,
            allow_http: false,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Mirror used when a primary page yields nothing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,

    /// Host whose `/<owner>/<repo>/<skill>` URLs have a mirror
    #[serde(rename = "source-host")]
    pub source_host: String,

    /// Mirror prefix; `/<owner>/<repo>/<skill>` is appended
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_host: "skills.sh".to_string(),
            base_url: "https://agent-skills.md/skills".to_string(),
        }
    }
}

/// External discovery tool invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub program: String,

    /// Arguments placed before the query words
    pub args: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["skills".to_string(), "find".to_string()],
        }
    }
}
