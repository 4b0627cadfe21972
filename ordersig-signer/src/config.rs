//! Signer configuration.
//!
//! Loads configuration from a TOML file with environment variable expansion
//! in string values (`$VAR` or `${VAR}` syntax), then applies `PRIVATE_KEY`
//! and `RPC_URL` environment overrides. The private key is required and is
//! validated before any network activity.
//!
//! # Example Configuration
//!
//! ```toml
//! rpc_url = "https://ethereum-sepolia-rpc.publicnode.com"
//! contract_address = "0x661BA295CCb1b6e1940c71dAB198001207DE1A8E"
//! chain_id = 11155111
//! private_key = "$PRIVATE_KEY"
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to configuration file (default: `signer.toml`)
//! - `PRIVATE_KEY` — Override / provide the signing key
//! - `RPC_URL` — Override the JSON-RPC endpoint

use std::path::Path;

use alloy_primitives::{Address, address};
use regex::{Captures, Regex};
use serde::Deserialize;

/// Explicit configuration record for one signing run.
///
/// Passed into [`flow::run`](crate::flow::run) rather than read ambiently,
/// so tests can substitute endpoints and keys.
#[derive(Debug, Clone, Deserialize)]
pub struct SignerConfig {
    /// Hex-encoded signing key, with or without `0x` prefix. Required.
    #[serde(default)]
    pub private_key: String,

    /// HTTP JSON-RPC endpoint URL.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Address of the deployed `SignatureVerifier` contract.
    #[serde(default = "default_contract_address")]
    pub contract_address: Address,

    /// Chain id used in the EIP-712 domain (default: Sepolia).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Order amount in base units (default: 1.0 token at 18 decimals).
    #[serde(default = "default_amount_wei")]
    pub amount_wei: u128,

    /// Fixed gas-limit ceiling for the `executeOrder` transaction.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
}

fn default_rpc_url() -> String {
    "https://ethereum-sepolia-rpc.publicnode.com".to_owned()
}

const fn default_contract_address() -> Address {
    address!("0x661BA295CCb1b6e1940c71dAB198001207DE1A8E")
}

const fn default_chain_id() -> u64 {
    11_155_111
}

const fn default_amount_wei() -> u128 {
    1_000_000_000_000_000_000
}

const fn default_gas_limit() -> u64 {
    200_000
}

/// Errors from loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// No signing key was provided.
    #[error(
        "private_key is not set; provide it in the config file or the PRIVATE_KEY environment variable"
    )]
    MissingPrivateKey,
}

impl SignerConfig {
    /// Loads configuration from the path given by the `CONFIG` environment
    /// variable, falling back to `signer.toml` in the current directory.
    /// A missing file is not an error: defaults plus environment overrides
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if no
    /// private key is configured.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "signer.toml".to_owned());
        let content = if Path::new(&path).exists() {
            std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })?
        } else {
            String::new()
        };

        let mut config = Self::from_toml(&content)?;
        if let Ok(key) = std::env::var("PRIVATE_KEY") {
            config.private_key = key;
        }
        if let Ok(url) = std::env::var("RPC_URL") {
            config.rpc_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string, expanding `$VAR` / `${VAR}`
    /// references from the process environment. Does not validate; callers
    /// apply overrides first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(content);
        Ok(toml::from_str(&expanded)?)
    }

    /// Checks that a usable signing key is present.
    ///
    /// A value still containing a `$` reference means the environment
    /// variable it points at was never set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPrivateKey`] when the key is absent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.private_key.trim();
        if key.is_empty() || key.starts_with('$') {
            return Err(ConfigError::MissingPrivateKey);
        }
        Ok(())
    }
}

/// Expands `$VAR` and `${VAR}` patterns from environment variables.
/// Unresolved references are left as-is.
fn expand_env_vars(input: &str) -> String {
    let pattern = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("static pattern compiles");
    pattern
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_owned())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = SignerConfig::from_toml("").unwrap();
        assert_eq!(config.chain_id, 11_155_111);
        assert_eq!(config.amount_wei, 1_000_000_000_000_000_000);
        assert_eq!(config.gas_limit, 200_000);
        assert_eq!(
            config.contract_address,
            address!("0x661BA295CCb1b6e1940c71dAB198001207DE1A8E")
        );
        assert!(config.private_key.is_empty());
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let config = SignerConfig::from_toml("").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPrivateKey)
        ));
    }

    #[test]
    fn unresolved_env_reference_is_rejected() {
        let config =
            SignerConfig::from_toml("private_key = \"$ORDERSIG_TEST_UNSET_VARIABLE\"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPrivateKey)
        ));
    }

    #[test]
    fn explicit_values_parse() {
        let config = SignerConfig::from_toml(
            r#"
            private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            rpc_url = "http://localhost:8545"
            contract_address = "0x0000000000000000000000000000000000000001"
            chain_id = 31337
            amount_wei = 42
            gas_limit = 100000
            "#,
        )
        .unwrap();
        config.validate().unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, 31_337);
        assert_eq!(config.amount_wei, 42);
        assert_eq!(config.gas_limit, 100_000);
    }

    #[test]
    fn unset_variable_is_left_in_place() {
        let expanded = expand_env_vars("key = \"${ORDERSIG_TEST_UNSET_VARIABLE}\"");
        assert_eq!(expanded, "key = \"${ORDERSIG_TEST_UNSET_VARIABLE}\"");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            SignerConfig::from_toml("chain_id = \"not a number\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
