use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub alchemy: AlchemyConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlchemyConfig {
    /// No default: a missing key is a startup error, never an unauthenticated call.
    #[serde(default)]
    pub api_key: Option<String>,
    pub network: String,
    /// Overrides `https://{network}.g.alchemy.com/v2`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of a local wallet answering `eth_requestAccounts`.
    #[serde(default)]
    pub provider_url: Option<String>,
    /// Show wallet connection failures as a query error instead of only logging them.
    #[serde(default)]
    pub surface_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                log_level: "info".to_string(),
            },
            alchemy: AlchemyConfig {
                api_key: None,
                network: "eth-mainnet".to_string(),
                base_url: None,
                request_timeout_secs: None,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string(), "PUT".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
                supports_credentials: false,
            },
            wallet: WalletConfig::default(),
        }
    }
}

impl AlchemyConfig {
    /// Full JSON-RPC endpoint including the API key path segment.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.g.alchemy.com/v2", self.network),
        };

        let endpoint = format!("{}/{}", base, api_key);
        Url::parse(&endpoint).map_err(|e| ConfigError::InvalidUrl(base, e.to_string()))
    }
}

impl Config {
    /// Load from `path`, falling back to the environment when the file is unusable.
    pub fn load_with_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading config from {}", path.as_ref().display());
        let config = match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Config loaded from file");
                config
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                info!("Falling back to environment variables or defaults");
                Self::from_env()
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(api_key) = std::env::var("ALCHEMY_API_KEY") {
            config.alchemy.api_key = Some(api_key);
        }

        if let Ok(network) = std::env::var("ALCHEMY_NETWORK") {
            config.alchemy.network = network;
        }

        if let Ok(base_url) = std::env::var("ALCHEMY_BASE_URL") {
            config.alchemy.base_url = Some(base_url);
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(provider_url) = std::env::var("WALLET_PROVIDER_URL") {
            config.wallet.provider_url = Some(provider_url);
        }

        if let Ok(surface) = std::env::var("WALLET_SURFACE_ERRORS") {
            config.wallet.surface_errors = matches!(surface.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alchemy.endpoint()?;

        if let Some(provider_url) = &self.wallet.provider_url {
            Url::parse(provider_url)
                .map_err(|e| ConfigError::InvalidUrl(provider_url.clone(), e.to_string()))?;
        }

        Ok(())
    }
}
