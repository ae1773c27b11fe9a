// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{GatewayError, Result};
use crate::models::Credentials;
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Development backend, tried first on every request.
    pub local_origin: String,
    /// Deployed backend, used only when the local origin cannot be reached.
    pub production_origin: String,
    #[serde(default)]
    pub credentials: Credentials,
    /// Unset means the HTTP client default (no timeout).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub address_path: String,
    pub natural_path: String,
    pub health_path: String,
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Self::environment())
    }

    /// `ESTATE_GATEWAY__SECTION__KEY`; list keys take comma-separated values.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("ESTATE_GATEWAY")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("search.extra_keywords")
    }

    fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            network: NetworkConfig {
                local_origin: "http://localhost:5000".to_string(),
                production_origin: "https://api.example.com".to_string(),
                credentials: Credentials::Include,
                request_timeout_secs: None,
            },
            search: SearchConfig {
                address_path: "/api/search/address".to_string(),
                natural_path: "/api/search".to_string(),
                health_path: "/api/health".to_string(),
                extra_keywords: vec![],
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.network.local_origin)
            .map_err(|e| GatewayError::Config(format!("network.local_origin: {}", e)))?;
        Validator::validate_url(&self.network.production_origin)
            .map_err(|e| GatewayError::Config(format!("network.production_origin: {}", e)))?;

        if self.network.request_timeout_secs == Some(0) {
            return Err(GatewayError::Config(
                "request_timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        for (name, path) in [
            ("search.address_path", &self.search.address_path),
            ("search.natural_path", &self.search.natural_path),
            ("search.health_path", &self.search.health_path),
        ] {
            Validator::validate_request_path(path)
                .map_err(|e| GatewayError::Config(format!("{}: {}", name, e)))?;
        }

        Ok(())
    }
}
