//! Environment-driven configuration.

use crate::error::ConfigError;

/// Runtime configuration. The webhook URL is the one required knob; the
/// inventory endpoint and token stand in for the ambient credentials and
/// region the underlying cloud account provides.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub inventory_api_url: String,
    pub inventory_api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            webhook_url: require("SLACK_WEBHOOK_URL")?,
            inventory_api_url: require("INVENTORY_API_URL")?,
            inventory_api_token: std::env::var("INVENTORY_API_TOKEN").ok(),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_webhook_url_is_reported_by_name() {
        std::env::remove_var("SLACK_WEBHOOK_URL");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SLACK_WEBHOOK_URL"));
    }
}
