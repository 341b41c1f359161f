//! Skill-Scout: describe what a skill search turned up
//!
//! This crate takes the raw text report of a skill discovery tool, parses it into
//! `(name, url)` entries and enriches every entry with a short description fetched
//! from its reference page, falling back to a mirror when the primary page fails.

pub mod config;
pub mod enrich;
pub mod output;
pub mod report;

use thiserror::Error;

/// Main error type for Skill-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Enrichment worker failed: {0}")]
    Worker(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Reasons a single fetch can fail
///
/// None of these are fatal to a run: the enrichment policy turns every one of
/// them into a fallback attempt or the "no description" sentinel.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Refusing non-HTTPS URL {url}")]
    InsecureUrl { url: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Too many redirects from {url}")]
    TooManyRedirects { url: String },

    #[error("Malformed redirect location {location:?} from {url}")]
    InvalidLocation { url: String, location: String },

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Errors obtaining the raw report from the discovery collaborator
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Failed to read report from {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },
}

/// Result type alias for Skill-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use enrich::{DescriptionSource, EnrichedEntry, Enricher, Enrichment};
pub use report::{parse_report, Entry};
