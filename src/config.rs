use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// AI provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Configuration for the AI provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Chat model used for recipe generation
    #[serde(default = "default_model")]
    pub model: String,
    /// Model used for image generation
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Requested image resolution
    #[serde(default = "default_image_size")]
    pub image_size: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            image_model: default_image_model(),
            image_size: default_image_size(),
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key from config, falling back to the OPENAI_API_KEY
    /// environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

// Default value functions
fn default_port() -> u16 {
    3001
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_MUSE prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_MUSE__PROVIDER__API_KEY
    ///
    /// The conventional deployment variables PORT and OPENAI_API_KEY are
    /// honored as well.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_MUSE__PROVIDER__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE_MUSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_port(), 3001);
        assert_eq!(default_model(), "gpt-3.5-turbo");
        assert_eq!(default_image_model(), "dall-e-3");
        assert_eq!(default_image_size(), "1024x1024");
    }

    #[test]
    fn test_provider_config_default() {
        let provider = ProviderConfig::default();
        assert!(provider.api_key.is_none());
        assert!(provider.base_url.is_none());
        assert_eq!(provider.model, "gpt-3.5-turbo");
        assert_eq!(provider.image_model, "dall-e-3");
        assert_eq!(provider.image_size, "1024x1024");
    }

    #[test]
    fn test_resolve_api_key_prefers_config() {
        let provider = ProviderConfig {
            api_key: Some("from-config".to_string()),
            ..ProviderConfig::default()
        };
        assert_eq!(provider.resolve_api_key().as_deref(), Some("from-config"));
    }
}
