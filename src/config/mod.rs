//! Configuration module for Skill-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so an absent file behaves like
//! an empty one.
//!
//! # Example
//!
//! ```no_run
//! use skill_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("skill-scout.toml")).unwrap();
//! println!("Enriching at most {} entries", config.enrich.max_entries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DiscoveryConfig, EnrichConfig, FallbackConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
