//! The sequential sign-and-submit flow.
//!
//! One run, no loops, no retries: load the key, read the maker's nonce,
//! build and sign the order, self-check the signature by local recovery,
//! then submit `executeOrder` and wait for the inclusion receipt. Any
//! failure aborts the run; a stale nonce reverts on-chain. This is an
//! interactive diagnostic aid, not a production submission pipeline.

use alloy_network::EthereumWallet;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types_eth::Filter;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::reqwest::Url;
use futures_util::{StreamExt, stream};
use ordersig::{
    ISignatureVerifier, Order, OrderSigner, order_digest, order_domain, recover_order_signer,
    sign_order,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SignerConfig;
use crate::error::FlowError;

/// Builds the order record for one run from the live on-chain nonce.
#[must_use]
pub fn build_order(maker: Address, amount_wei: u128, nonce: U256) -> Order {
    Order {
        maker,
        amount: U256::from(amount_wei),
        nonce,
    }
}

/// Runs the full flow described in the module docs.
///
/// # Errors
///
/// Returns [`FlowError`] on the first failing step; nothing is retried.
pub async fn run(config: SignerConfig) -> Result<(), FlowError> {
    let signer: PrivateKeySigner = config.private_key.trim().parse()?;
    let wallet_address = OrderSigner::address(&signer);
    info!(wallet = %wallet_address, "loaded signing key");

    let rpc_url: Url = config.rpc_url.parse()?;
    let wallet = EthereumWallet::from(signer.clone());
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(rpc_url);

    // Operator sanity-check only; the flow does not branch on this.
    let chain_id = provider.get_chain_id().await?;
    info!(chain_id, "connected to rpc endpoint");
    if chain_id != config.chain_id {
        warn!(
            configured = config.chain_id,
            reported = chain_id,
            "rpc endpoint reports a different chain id than configured"
        );
    }

    let contract = ISignatureVerifier::new(config.contract_address, &provider);

    let nonce = contract.getNextNonce(wallet_address).call().await?;
    info!(%nonce, "fetched maker nonce");

    let order = build_order(wallet_address, config.amount_wei, nonce);
    info!(maker = %order.maker, amount = %order.amount, nonce = %order.nonce, "constructed order");

    let domain = order_domain(config.chain_id, config.contract_address);
    let local_digest = order_digest(&order, &domain);

    // Diagnostic cross-check against the contract's own digest computation.
    let contract_digest = contract.getMessageHash(order.clone()).call().await?;
    info!(local = %local_digest, contract = %contract_digest, "order digest cross-check");

    let signature = sign_order(&signer, &order, &domain).await?;
    info!(signature = %signature, "signed order");

    // Self-check before spending gas: a mismatch means a signing or
    // encoding bug, and the contract would reject the order anyway.
    let recovered = recover_order_signer(&order, &domain, &signature)?;
    if recovered != wallet_address {
        return Err(FlowError::RecoveredMismatch {
            recovered,
            wallet: wallet_address,
        });
    }
    info!(%recovered, "local signature verification passed");

    // The watcher lives only as long as the submission below.
    let watcher = spawn_event_watcher(&provider, config.contract_address).await?;
    let result = submit_order(&contract, &order, signature, config.gas_limit).await;
    watcher.abort();
    result
}

/// Submits `executeOrder` with the fixed gas ceiling and awaits inclusion.
async fn submit_order<P: Provider>(
    contract: &ISignatureVerifier::ISignatureVerifierInstance<P>,
    order: &Order,
    signature: Bytes,
    gas_limit: u64,
) -> Result<(), FlowError> {
    let call = contract
        .executeOrder(order.clone(), signature)
        .gas(gas_limit);
    debug!(
        to = %contract.address(),
        calldata = %call.calldata(),
        "submitting executeOrder"
    );

    let pending = call.send().await?;
    info!(tx_hash = %pending.tx_hash(), "transaction sent");

    let receipt = pending.get_receipt().await?;
    info!(
        block_number = receipt.block_number.unwrap_or_default(),
        "transaction confirmed"
    );
    Ok(())
}

/// Spawns a poll-based watcher for the contract's diagnostic events.
///
/// Logs `Debug` and `OrderExecuted` events as they arrive. The returned
/// handle is aborted by the caller once submission completes or fails, so
/// the subscription never outlives the run.
async fn spawn_event_watcher<P: Provider>(
    provider: &P,
    contract_address: Address,
) -> Result<JoinHandle<()>, FlowError> {
    let filter = Filter::new().address(contract_address);
    let poller = provider.watch_logs(&filter).await?;
    Ok(tokio::spawn(async move {
        let mut logs = poller.into_stream().flat_map(stream::iter);
        while let Some(log) = logs.next().await {
            if let Ok(event) = log.log_decode::<ISignatureVerifier::Debug>() {
                let event = event.inner.data;
                info!(
                    digest = %event.digest,
                    recovered = %event.recovered,
                    maker = %event.maker,
                    "contract Debug event"
                );
            } else if let Ok(event) = log.log_decode::<ISignatureVerifier::OrderExecuted>() {
                let event = event.inner.data;
                info!(
                    maker = %event.maker,
                    amount = %event.amount,
                    nonce = %event.nonce,
                    "contract OrderExecuted event"
                );
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn order_carries_the_fetched_nonce_exactly() {
        let maker = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let nonce = U256::from(7u8);
        let order = build_order(maker, 1_000_000_000_000_000_000, nonce);
        assert_eq!(order.nonce, nonce);
        assert_eq!(order.maker, maker);
        assert_eq!(order.amount, U256::from(1_000_000_000_000_000_000u128));
    }
}
