//! Flow error taxonomy and exit-code mapping.
//!
//! Everything here is terminal for the run: configuration errors abort
//! before any network activity, and every later failure (transport error,
//! contract revert, receipt timeout) aborts with exit code 1. No
//! transient/permanent distinction is made and nothing is retried.

use alloy_primitives::Address;

use crate::config::ConfigError;

/// Errors from the sign-and-submit flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured private key is not valid key material.
    #[error("invalid private key: {0}")]
    InvalidKey(#[from] alloy_signer_local::LocalSignerError),

    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid rpc url: {0}")]
    RpcUrl(#[from] url::ParseError),

    /// JSON-RPC transport failure.
    #[error(transparent)]
    Rpc(#[from] alloy_transport::TransportError),

    /// Contract call failure, including reverts.
    #[error(transparent)]
    Contract(#[from] alloy_contract::Error),

    /// Local EIP-712 signing or recovery failure.
    #[error(transparent)]
    Sign(#[from] ordersig::SignError),

    /// The locally recovered signer does not match the wallet address.
    /// Submission is aborted before any gas is spent.
    #[error("recovered signer {recovered} does not match wallet address {wallet}")]
    RecoveredMismatch {
        /// Address recovered from the freshly produced signature.
        recovered: Address,
        /// Address of the configured wallet.
        wallet: Address,
    },

    /// The transaction was sent but no inclusion receipt arrived within
    /// the provider's polling window.
    #[error(transparent)]
    Pending(#[from] alloy_provider::PendingTransactionError),
}

/// Logs a flow failure with its full cause chain and, for contract
/// errors, any attached revert data.
pub fn log_failure(err: &FlowError) {
    tracing::error!(error = %err, "order submission failed");
    if let FlowError::Contract(contract_err) = err {
        if let Some(revert) = contract_err.as_revert_data() {
            tracing::error!(revert_data = %revert, "contract revert data");
        }
    }
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        tracing::error!(cause = %cause, "caused by");
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn mismatch_error_names_both_addresses() {
        let err = FlowError::RecoveredMismatch {
            recovered: address!("0x0000000000000000000000000000000000000001"),
            wallet: address!("0x0000000000000000000000000000000000000002"),
        };
        let text = err.to_string();
        assert!(text.contains("0x0000000000000000000000000000000000000001"));
        assert!(text.contains("0x0000000000000000000000000000000000000002"));
    }
}
