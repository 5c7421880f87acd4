use crate::config::types::{AnalysisConfig, Config, CrawlerConfig, UserAgentConfig};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Page budget and batch width are not checked here; `CrawlOptions` clamps them.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_analysis_config(&config.analysis)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "timeout_ms must be greater than 0".to_string(),
        ));
    }

    if config.max_entry_urls == 0 {
        return Err(ConfigError::Validation(
            "max_entry_urls must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates request header configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("user_agent", &config.user_agent),
        ("accept", &config.accept),
        ("accept_language", &config.accept_language),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot be empty",
                name
            )));
        }

        // Header values must be visible ASCII or spaces
        if !value.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
            return Err(ConfigError::Validation(format!(
                "{} contains characters not allowed in an HTTP header: '{}'",
                name, value
            )));
        }
    }

    Ok(())
}

/// Validates analysis configuration
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.top_n == 0 {
        return Err(ConfigError::Validation("top_n must be >= 1".to_string()));
    }

    if let Some(path) = &config.stopwords_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "stopwords_path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
