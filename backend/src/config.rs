use shared::{ClientConfig, DEFAULT_PREDICTION_URL};
use std::path::PathBuf;
use url::Url;

const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PREDICTION_URL is not a valid URL: {0}")]
    InvalidPredictionUrl(#[from] url::ParseError),
    #[error("PREDICTION_URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Validated, but kept exactly as configured.
    pub prediction_url: String,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let raw_url = lookup("PREDICTION_URL").unwrap_or_else(|| DEFAULT_PREDICTION_URL.to_string());
        let parsed = Url::parse(&raw_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        let prediction_url = raw_url;

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_frontend_dir);

        Ok(Self {
            port,
            prediction_url,
            frontend_dir,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            prediction_url: self.prediction_url.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn default_frontend_dir() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
        Err(_) => PathBuf::from("/usr/src/app/frontend/dist"),
    }
}
