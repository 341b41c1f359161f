use crate::config::types::{Config, DiscoveryConfig, EnrichConfig, FallbackConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

const MAX_CONCURRENCY: usize = 100;
const MAX_REDIRECTS: u32 = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_enrich_config(&config.enrich)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_fallback_config(&config.fallback)?;
    validate_discovery_config(&config.discovery)?;
    Ok(())
}

/// Validates enrichment limits
///
/// Zero concurrency and zero timeout are accepted here and floored to 1 when
/// the settings are resolved, matching the command-line behavior.
fn validate_enrich_config(config: &EnrichConfig) -> Result<(), ConfigError> {
    if config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be at most {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be at most {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.name
        )));
    }

    if config.version.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "user-agent version cannot contain whitespace, got '{}'",
            config.version
        )));
    }

    Ok(())
}

/// Validates the fallback mirror settings
fn validate_fallback_config(config: &FallbackConfig) -> Result<(), ConfigError> {
    if config.source_host.is_empty() || config.source_host.contains('/') {
        return Err(ConfigError::Validation(format!(
            "fallback source-host must be a bare host, got '{}'",
            config.source_host
        )));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid fallback base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "fallback base-url '{}' must use HTTP or HTTPS",
            config.base_url
        )));
    }

    Ok(())
}

fn validate_discovery_config(config: &DiscoveryConfig) -> Result<(), ConfigError> {
    if config.program.trim().is_empty() {
        return Err(ConfigError::Validation(
            "discovery program cannot be empty".to_string(),
        ));
    }
    Ok(())
}
