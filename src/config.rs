//! Environment configuration
//!
//! Chain settings are resolved on every request so a missing variable fails
//! that request rather than process startup. Server settings are read once.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const RPC_URL: &str = "RPC_URL";
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const CHAT_CONTRACT_ADDRESS: &str = "CHAT_CONTRACT_ADDRESS";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing {0} in environment")]
    Missing(&'static str),
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection settings for the chat contract
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub rpc_url: Url,
    pub signer: PrivateKeySigner,
    pub contract_address: Address,
}

impl ChainConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve settings through `lookup`. Variables are checked in the order
    /// RPC URL, private key, contract address; the first absent one is reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rpc_url = require(&lookup, RPC_URL)?;
        let private_key = require(&lookup, PRIVATE_KEY)?;
        let contract_address = require(&lookup, CHAT_CONTRACT_ADDRESS)?;

        Ok(Self {
            rpc_url: rpc_url
                .trim()
                .parse::<Url>()
                .map_err(|e| invalid(RPC_URL, e))?,
            signer: private_key
                .trim()
                .parse::<PrivateKeySigner>()
                .map_err(|e| invalid(PRIVATE_KEY, e))?,
            contract_address: contract_address
                .trim()
                .parse::<Address>()
                .map_err(|e| invalid(CHAT_CONTRACT_ADDRESS, e))?,
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn invalid(var: &'static str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: err.to_string(),
    }
}

/// Process-level settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub poll_interval: Duration,
    /// `None` polls until a reply arrives
    pub max_polls: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Malformed values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("CHAT_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            poll_interval: lookup("CHAT_POLL_INTERVAL_MS")
                .and_then(|ms| ms.parse().ok())
                .map_or(defaults.poll_interval, Duration::from_millis),
            max_polls: lookup("CHAT_MAX_POLLS")
                .and_then(|n| n.parse().ok())
                .filter(|&n: &u32| n > 0),
        }
    }
}
