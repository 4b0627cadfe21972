//! EIP-712 domain construction, digest computation, signing, and recovery.
//!
//! The domain binds a signature to exactly one `SignatureVerifier`
//! deployment: a signature produced here fails verification under any other
//! (name, version, chain id, contract) tuple. Recovery is the local
//! self-check the CLI runs before spending gas on submission.

use std::future::Future;
use std::sync::Arc;

use alloy_primitives::{Address, B256, Bytes, Signature};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::{Eip712Domain, SolStruct, eip712_domain};

use crate::contract::Order;
use crate::error::SignError;

/// EIP-712 domain name fixed by the contract deployment.
pub const DOMAIN_NAME: &str = "SignatureVerifier";

/// EIP-712 domain version fixed by the contract deployment.
pub const DOMAIN_VERSION: &str = "1.0.0";

/// A trait that abstracts signing operations, allowing both owned signers
/// and `Arc`-wrapped signers.
///
/// Alloy's `Signer` trait is not implemented for `Arc<T>`, but callers may
/// want to share a signer, and tests want to substitute a mock. Everything
/// the order flow needs is an address and a prehash signature.
pub trait OrderSigner: Send + Sync {
    /// Returns the address of the signing key.
    fn address(&self) -> Address;

    /// Signs the given 32-byte digest.
    fn sign_hash(
        &self,
        hash: &B256,
    ) -> impl Future<Output = Result<Signature, alloy_signer::Error>> + Send;
}

impl OrderSigner for PrivateKeySigner {
    fn address(&self) -> Address {
        Self::address(self)
    }

    async fn sign_hash(&self, hash: &B256) -> Result<Signature, alloy_signer::Error> {
        alloy_signer::Signer::sign_hash(self, hash).await
    }
}

impl<T: OrderSigner> OrderSigner for Arc<T> {
    fn address(&self) -> Address {
        (**self).address()
    }

    async fn sign_hash(&self, hash: &B256) -> Result<Signature, alloy_signer::Error> {
        (**self).sign_hash(hash).await
    }
}

/// Builds the EIP-712 domain for a `SignatureVerifier` deployment.
///
/// Name and version are fixed by the contract; chain id and contract
/// address come from configuration.
#[must_use]
pub fn order_domain(chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    eip712_domain! {
        name: DOMAIN_NAME,
        version: DOMAIN_VERSION,
        chain_id: chain_id,
        verifying_contract: verifying_contract,
    }
}

/// Computes the EIP-712 signing hash of an order under the given domain.
///
/// This is the digest the contract's `getMessageHash` must agree with.
#[must_use]
pub fn order_digest(order: &Order, domain: &Eip712Domain) -> B256 {
    order.eip712_signing_hash(domain)
}

/// Signs an order with EIP-712, returning the 65-byte signature.
///
/// # Errors
///
/// Returns [`SignError::Signer`] if the underlying signer fails.
pub async fn sign_order<S: OrderSigner>(
    signer: &S,
    order: &Order,
    domain: &Eip712Domain,
) -> Result<Bytes, SignError> {
    let digest = order_digest(order, domain);
    let signature = signer.sign_hash(&digest).await?;
    Ok(Bytes::from(signature.as_bytes().to_vec()))
}

/// Recovers the signer address of an order signature.
///
/// Accepts 65-byte (r || s || v) and 64-byte ERC-2098 compact signatures.
/// A signature over a different order, or under a different domain, recovers
/// a different address than the one that signed.
///
/// # Errors
///
/// Returns [`SignError::InvalidLength`] for malformed signature bytes and
/// [`SignError::Ecdsa`] if public key recovery fails.
pub fn recover_order_signer(
    order: &Order,
    domain: &Eip712Domain,
    signature: &[u8],
) -> Result<Address, SignError> {
    let signature = match signature.len() {
        65 => Signature::from_raw(signature)?,
        64 => Signature::from_erc2098(signature),
        len => return Err(SignError::InvalidLength(len)),
    };
    let digest = order_digest(order, domain);
    Ok(signature.recover_address_from_prehash(&digest)?)
}
