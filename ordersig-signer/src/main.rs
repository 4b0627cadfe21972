//! Order-signing CLI for the `SignatureVerifier` contract.
//!
//! Builds an EIP-712 order from the maker's live on-chain nonce, signs it,
//! self-checks the signature locally, then submits `executeOrder` and waits
//! for the inclusion receipt.
//!
//! # Usage
//!
//! ```bash
//! # Key from the environment (or a .env file), everything else defaulted
//! PRIVATE_KEY=0x... cargo run -p ordersig-signer
//!
//! # Run with a custom config path
//! CONFIG=/path/to/signer.toml cargo run -p ordersig-signer
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p ordersig-signer
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to TOML configuration file (default: `signer.toml`)
//! - `PRIVATE_KEY` — Signing key (required if not in the config file)
//! - `RPC_URL` — Override the JSON-RPC endpoint
//! - `RUST_LOG` — Log level filter (default: `info`)
//!
//! Exits 0 when the transaction is confirmed, 1 on any error.

use tracing_subscriber::EnvFilter;

use ordersig_signer::config::SignerConfig;
use ordersig_signer::error::log_failure;
use ordersig_signer::flow;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration errors abort before any network activity.
    let config = match SignerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = flow::run(config).await {
        log_failure(&err);
        std::process::exit(1);
    }
}
