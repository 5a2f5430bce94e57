//! Calldata for the SP1 verifier gateway
//!
//! The gateway routes proofs to verifiers by the first 4 bytes of the
//! verifier hash. Governance adds a route by pointing the gateway at a
//! verifier contract and freezes one by its 4-byte selector.

use alloy_primitives::{Address, FixedBytes, hex};
use alloy_sol_types::{SolCall, sol};
use serde::{Deserialize, Serialize};

// The sol! macro derives SELECTOR constants as keccak256(signature)[..4]
sol! {
    interface ISP1VerifierGateway {
        function addRoute(address verifier) external;
        function freezeRoute(bytes4 selector) external;
    }
}

pub use ISP1VerifierGateway::{addRouteCall, freezeRouteCall};

/// Name of the `addRoute` argument, shared by the ABI fragment and the input values
pub const ADD_ROUTE_INPUT: &str = "verifier";
/// Name of the `freezeRoute` argument
pub const FREEZE_ROUTE_INPUT: &str = "selector";

/// Encodes `addRoute(address)`.
///
/// The address is left-padded to a 32-byte word. Output is lowercase hex
/// with a `0x` prefix.
pub fn encode_add_route(verifier: Address) -> String {
    hex::encode_prefixed(addRouteCall { verifier }.abi_encode())
}

/// Encodes `freezeRoute(bytes4)`.
///
/// Unlike an address, a `bytes4` is right-padded within its 32-byte word.
pub fn encode_freeze_route(selector: [u8; 4]) -> String {
    hex::encode_prefixed(
        freezeRouteCall {
            selector: FixedBytes(selector),
        }
        .abi_encode(),
    )
}

/// ABI fragment shown by the Transaction Builder for a single call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMethod {
    pub inputs: Vec<MethodInput>,
    pub name: String,
    pub payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInput {
    pub internal_type: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl ContractMethod {
    fn single_input(function: &str, input_type: &str, input_name: &str) -> Self {
        Self {
            inputs: vec![MethodInput {
                internal_type: input_type.to_string(),
                name: input_name.to_string(),
                ty: input_type.to_string(),
            }],
            name: function.to_string(),
            payable: false,
        }
    }

    pub fn add_route() -> Self {
        Self::single_input("addRoute", "address", ADD_ROUTE_INPUT)
    }

    pub fn freeze_route() -> Self {
        Self::single_input("freezeRoute", "bytes4", FREEZE_ROUTE_INPUT)
    }
}
