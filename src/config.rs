use crate::args::CliArgs;
use crate::core::DEFAULT_REGION_CODE;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 7182 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_file_path")]
    pub file_path: String,
    #[serde(default = "default_region_code")]
    pub region_code: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            region_code: default_region_code(),
        }
    }
}

fn default_file_path() -> String { "data/cities.csv".to_string() }
fn default_region_code() -> String { DEFAULT_REGION_CODE.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SUGGEST__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SUGGEST__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration honouring the command line
    ///
    /// `--config` replaces the default file lookup, then `--addr` and
    /// `--data-file-path` override whatever the files and environment set.
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut settings = match &args.config {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        settings.apply_args(args)?;
        Ok(settings)
    }

    pub fn apply_args(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(addr) = &args.addr {
            let addr: SocketAddr = addr
                .parse()
                .map_err(|e| ConfigError::Message(format!("invalid --addr {:?}: {}", addr, e)))?;
            self.server.host = addr.ip().to_string();
            self.server.port = addr.port();
        }
        if let Some(path) = &args.data_file_path {
            self.data.file_path = path.clone();
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SUGGEST")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
