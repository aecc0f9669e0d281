//! Connection options shared across commands

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Args;

use crate::app::{ClientConfig, DEFAULT_BASE_URL};

/// Options that locate and tune the game service connection
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Base URL of the game service
    #[arg(long, short = 'u', env = "BOARDSYNC_URL")]
    pub url: Option<String>,

    /// JSON config file (flags and BOARDSYNC_URL take precedence)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Show debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl ConnectionArgs {
    /// Resolve flags, environment and config file into a client config.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ClientConfig::new(DEFAULT_BASE_URL),
        };

        if let Some(url) = &self.url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}
