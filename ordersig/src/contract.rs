//! Solidity interface definitions for the `SignatureVerifier` contract.
//!
//! Only the ABI surface used by the signing flow is declared:
//! nonce lookup, the contract-side digest computation used for the
//! diagnostic cross-check, order execution, and the two events the
//! contract emits while executing.

use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};

sol! {
    /// Order book entry signed by a maker and executed on-chain.
    ///
    /// The struct hash of this type (under the `SignatureVerifier` domain)
    /// is what both the maker and the contract sign/verify. Field order
    /// MUST match the on-chain struct definition.
    #[allow(missing_docs)]
    #[derive(Debug, Serialize, Deserialize)]
    struct Order {
        address maker;
        uint256 amount;
        uint256 nonce;
    }

    /// Minimal `SignatureVerifier` interface.
    ///
    /// Declares only the ABI surface the tooling consumes; the contract
    /// itself is an external deployment.
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface ISignatureVerifier {
        function getNextNonce(address maker) external view returns (uint256);
        function getMessageHash(Order order) external view returns (bytes32);
        function executeOrder(Order order, bytes signature) external;
        function nonces(address maker) external view returns (uint256);

        event Debug(bytes32 digest, address recovered, address maker);
        event OrderExecuted(address maker, uint256 amount, uint256 nonce);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::{SolEvent, SolStruct};

    #[test]
    fn order_eip712_root_type_matches_contract() {
        assert_eq!(
            Order::eip712_root_type(),
            "Order(address maker,uint256 amount,uint256 nonce)"
        );
    }

    #[test]
    fn event_signatures_match_abi() {
        assert_eq!(
            ISignatureVerifier::Debug::SIGNATURE,
            "Debug(bytes32,address,address)"
        );
        assert_eq!(
            ISignatureVerifier::OrderExecuted::SIGNATURE,
            "OrderExecuted(address,uint256,uint256)"
        );
    }
}
