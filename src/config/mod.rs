//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SYNOSCORE_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::similarity::OracleKind;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SYNOSCORE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the embedding model files (`config.json`,
    /// `tokenizer.json`, `model.safetensors`).
    pub model_path: Option<PathBuf>,

    /// Forced oracle backend. `None` selects the embedding oracle when a
    /// model path is configured and TF-IDF otherwise.
    pub oracle: Option<OracleKind>,

    /// Coverage threshold override. `None` uses the selected oracle's
    /// default.
    pub coverage_threshold: Option<f32>,

    /// Target number of article chunks per evaluation. Default: `10`.
    pub target_chunks: usize,

    /// Bearer token required on scoring requests. `None` leaves the
    /// endpoint open.
    pub access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            oracle: None,
            coverage_threshold: None,
            target_chunks: crate::constants::DEFAULT_TARGET_CHUNKS,
            access_token: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SYNOSCORE_PORT";
    const ENV_BIND_ADDR: &'static str = "SYNOSCORE_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "SYNOSCORE_MODEL_PATH";
    const ENV_ORACLE: &'static str = "SYNOSCORE_ORACLE";
    const ENV_COVERAGE_THRESHOLD: &'static str = "SYNOSCORE_COVERAGE_THRESHOLD";
    const ENV_TARGET_CHUNKS: &'static str = "SYNOSCORE_TARGET_CHUNKS";
    const ENV_ACCESS_TOKEN: &'static str = "SYNOSCORE_ACCESS_TOKEN";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let oracle = Self::parse_oracle_from_env()?;
        let coverage_threshold = Self::parse_threshold_from_env()?;
        let target_chunks =
            Self::parse_usize_from_env(Self::ENV_TARGET_CHUNKS, defaults.target_chunks);
        let access_token = Self::parse_optional_string_from_env(Self::ENV_ACCESS_TOKEN);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            oracle,
            coverage_threshold,
            target_chunks,
            access_token,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.oracle == Some(OracleKind::Embedding) && self.model_path.is_none() {
            return Err(ConfigError::ModelPathRequired);
        }

        if let Some(threshold) = self.coverage_threshold {
            if !(threshold > 0.0 && threshold < 1.0) {
                return Err(ConfigError::InvalidThreshold {
                    value: threshold.to_string(),
                });
            }
        }

        if self.target_chunks == 0 {
            return Err(ConfigError::InvalidTargetChunks);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_oracle_from_env() -> Result<Option<OracleKind>, ConfigError> {
        match env::var(Self::ENV_ORACLE) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                OracleKind::from_label(trimmed)
                    .map(Some)
                    .ok_or_else(|| ConfigError::InvalidOracle {
                        value: trimmed.to_string(),
                    })
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_threshold_from_env() -> Result<Option<f32>, ConfigError> {
        match env::var(Self::ENV_COVERAGE_THRESHOLD) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f32>()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidThreshold {
                        value: trimmed.to_string(),
                    })
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
