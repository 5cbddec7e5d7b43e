//! Configuration management for the directory server

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Health-check results produced by the checker
    pub tests_path: PathBuf,

    /// Working API instances list
    pub api_path: PathBuf,

    /// Working frontend instances list
    pub frontends_path: PathBuf,

    /// Root domain whose hosts count as official
    pub official_domain: String,

    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            tests_path: PathBuf::from("/data/tests.json"),
            api_path: PathBuf::from("/data/api.json"),
            frontends_path: PathBuf::from("/data/api_frontends.json"),
            official_domain: "imput.net".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Command line overrides, applied on top of `Config::from_env`
#[derive(Debug, Default, Parser)]
#[command(name = "instance-directory", version, about = "Serves instance health-check views")]
pub struct Cli {
    #[arg(long)]
    pub bind_address: Option<String>,

    #[arg(long, short)]
    pub port: Option<u16>,

    #[arg(long)]
    pub tests_path: Option<PathBuf>,

    #[arg(long)]
    pub api_path: Option<PathBuf>,

    #[arg(long)]
    pub frontends_path: Option<PathBuf>,

    #[arg(long)]
    pub official_domain: Option<String>,

    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(bind_address) = env::var("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Ok(path) = env::var("TESTS_JSON_PATH") {
            config.tests_path = PathBuf::from(path);
        }

        if let Ok(path) = env::var("API_JSON_PATH") {
            config.api_path = PathBuf::from(path);
        }

        if let Ok(path) = env::var("API_FRONTENDS_JSON_PATH") {
            config.frontends_path = PathBuf::from(path);
        }

        if let Ok(domain) = env::var("OFFICIAL_DOMAIN") {
            config.official_domain = domain.trim().to_lowercase();
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Apply values given on the command line over the current ones
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(bind_address) = cli.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(path) = cli.tests_path {
            self.tests_path = path;
        }
        if let Some(path) = cli.api_path {
            self.api_path = path;
        }
        if let Some(path) = cli.frontends_path {
            self.frontends_path = path;
        }
        if let Some(domain) = cli.official_domain {
            self.official_domain = domain.trim().to_lowercase();
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.tests_path.as_os_str().is_empty() {
            return Err("tests_path cannot be empty".to_string());
        }

        if self.api_path.as_os_str().is_empty() {
            return Err("api_path cannot be empty".to_string());
        }

        if self.frontends_path.as_os_str().is_empty() {
            return Err("frontends_path cannot be empty".to_string());
        }

        if self.official_domain.is_empty() {
            return Err("official_domain cannot be empty".to_string());
        }

        if self.official_domain.starts_with('.') || self.official_domain.contains("://") {
            return Err("official_domain must be a bare host like imput.net".to_string());
        }

        Ok(())
    }
}
