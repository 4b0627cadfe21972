//! Signing and recovery error types.

/// Errors from signing an order or recovering its signer.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The underlying signer failed to produce a signature.
    #[error(transparent)]
    Signer(#[from] alloy_signer::Error),

    /// The signature bytes are not 64 or 65 bytes long.
    #[error("invalid signature length {0}, expected 64 or 65 bytes")]
    InvalidLength(usize),

    /// The signature could not be parsed or public key recovery failed.
    #[error(transparent)]
    Ecdsa(#[from] alloy_primitives::SignatureError),
}
