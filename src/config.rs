// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the document templates (`<type>.html`)
    pub templates_dir: PathBuf,
    /// Explicit Chromium binary; autodetected when unset
    pub chrome_path: Option<PathBuf>,
    /// Run Chromium with its sandbox (must be off as root in containers)
    pub chrome_sandbox: bool,
    /// Upper bound on a single HTML-to-PDF conversion
    pub render_timeout: Duration,
    /// Number of documents rendered at the same time
    pub max_concurrent_renders: usize,
    /// Request body limit in bytes
    pub max_body_bytes: usize,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_RENDERS: usize = 4;
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            templates_dir: env::var("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATES_DIR)),
            chrome_path: env::var("CHROME_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            chrome_sandbox: parse_var("CHROME_SANDBOX", true)?,
            render_timeout: Duration::from_secs(parse_var(
                "RENDER_TIMEOUT_SECS",
                DEFAULT_RENDER_TIMEOUT_SECS,
            )?),
            max_concurrent_renders: parse_var(
                "MAX_CONCURRENT_RENDERS",
                DEFAULT_MAX_CONCURRENT_RENDERS,
            )?
            .max(1),
            max_body_bytes: parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            chrome_path: None,
            chrome_sandbox: false,
            render_timeout: Duration::from_secs(5),
            max_concurrent_renders: 2,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// `host:port` the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read `name` from the environment, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var: name,
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
