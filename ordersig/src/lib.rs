//! EIP-712 order signing for the `SignatureVerifier` contract.
//!
//! This crate provides the pieces shared by the order-signing CLI and its
//! tests:
//!
//! - [`contract`] - minimal `SignatureVerifier` ABI bindings (calls + events)
//! - [`order`] - EIP-712 domain construction, digest computation, signing,
//!   and local signer recovery
//! - [`error`] - signing/recovery error types
//!
//! The contract itself is an external collaborator; only the ABI surface the
//! tooling actually calls is declared here. An [`Order`] is built fresh per
//! run from the contract's live nonce and is never persisted: consuming the
//! nonce on-chain invalidates the signature for replay.

pub mod contract;
pub mod error;
pub mod order;

pub use contract::{ISignatureVerifier, Order};
pub use error::SignError;
pub use order::{OrderSigner, order_digest, order_domain, recover_order_signer, sign_order};
