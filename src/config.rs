//! Server configuration
//!
//! Layered: built-in defaults, then `PATHWAY_*` environment variables, then
//! `--flag=value` command-line arguments.

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    /// Reject requests without a positive model size and latency
    pub strict_validation: bool,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            strict_validation: true,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with the process environment and arguments
    pub fn load(args: &[String]) -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        Self::default().with_env(env)?.with_args(args)
    }

    /// Apply `PATHWAY_HOST`, `PATHWAY_PORT` and `PATHWAY_TIMEOUT_SECS`
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PATHWAY_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PATHWAY_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("PATHWAY_PORT is not a valid port: {}", port))?;
        }
        if let Some(secs) = lookup("PATHWAY_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("PATHWAY_TIMEOUT_SECS is not a number: {}", secs))?;
            self.request_timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Apply `--host=`, `--port=`, `--timeout=` and `--lenient`
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        for arg in args {
            if let Some(host) = arg.strip_prefix("--host=") {
                self.host = host.to_string();
            } else if let Some(port) = arg.strip_prefix("--port=") {
                self.port = port
                    .parse()
                    .with_context(|| format!("--port is not a valid port: {}", port))?;
            } else if let Some(secs) = arg.strip_prefix("--timeout=") {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("--timeout is not a number: {}", secs))?;
                self.request_timeout = Duration::from_secs(secs);
            } else if arg == "--lenient" {
                self.strict_validation = false;
            }
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
