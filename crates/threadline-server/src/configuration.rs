use crate::error::ConfigError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use threadline::compiler::budget::Budget;
use threadline::providers::capabilities::ProviderVariant;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompilerSettings {
    /// Number of most recent turns sent per request
    #[serde(default = "default_budget")]
    pub budget: i64,
    /// Provider variant name, see [`ProviderVariant`]
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            provider: default_provider(),
        }
    }
}

impl CompilerSettings {
    /// Fail at startup rather than on the first compile
    pub fn validate(&self) -> Result<Budget, ConfigError> {
        Ok(Budget::try_from(self.budget)?)
    }

    pub fn provider_variant(&self) -> ProviderVariant {
        ProviderVariant::parse(&self.provider)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub compiler: CompilerSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("compiler.budget", default_budget())?
            .set_default("compiler.provider", default_provider())?
            // Optional threadline.toml in the working directory
            .add_source(File::with_name("threadline").required(false))
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("THREADLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Other(err)
        })
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_budget() -> i64 {
    50
}

fn default_provider() -> String {
    "openai".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("THREADLINE_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.compiler.budget, 50);
        assert_eq!(settings.compiler.provider_variant(), ProviderVariant::OpenAi);
        assert_eq!(settings.compiler.validate().unwrap(), Budget::new(50));
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("THREADLINE_SERVER__PORT", "8080");
        env::set_var("THREADLINE_COMPILER__BUDGET", "12");
        env::set_var("THREADLINE_COMPILER__PROVIDER", "ollama");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.compiler.budget, 12);
        assert_eq!(settings.compiler.provider_variant(), ProviderVariant::Ollama);
        assert!(settings.compiler.provider_variant().capabilities().tool_echo);

        clean_env();
    }

    #[test]
    #[serial]
    fn test_negative_budget_fails_validation() {
        clean_env();
        env::set_var("THREADLINE_COMPILER__BUDGET", "-1");

        let settings = Settings::new().unwrap();
        assert!(matches!(
            settings.compiler.validate(),
            Err(ConfigError::Compiler(_))
        ));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_malformed_budget() {
        clean_env();
        env::set_var("THREADLINE_COMPILER__BUDGET", "lots");

        let result = Settings::new();
        assert!(matches!(result, Err(ConfigError::Other(_))));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_partial_environment_keeps_defaults() {
        clean_env();
        env::set_var("THREADLINE_COMPILER__PROVIDER", "ollama");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.compiler.provider, "ollama");
        assert_eq!(settings.compiler.budget, 50);
        assert_eq!(settings.server.port, 3000);

        env::set_var("THREADLINE_SERVER__PORT", "not-a-port");
        assert!(matches!(Settings::new(), Err(ConfigError::Other(_))));

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = server_settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
