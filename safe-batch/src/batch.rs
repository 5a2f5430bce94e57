//! Safe Transaction Builder batches
//!
//! The Transaction Builder app accepts a JSON document listing calls with
//! their ABI fragment so reviewers see decoded arguments next to the raw
//! calldata. One batch is produced per chain, covering both gateways.

use crate::calldata::{
    ADD_ROUTE_INPUT, ContractMethod, FREEZE_ROUTE_INPUT, encode_add_route, encode_freeze_route,
};
use crate::chains::display_name;
use crate::deployment::DeploymentRecord;
use crate::error::BatchError;
use crate::selectors::{freeze_selectors, known_freeze_versions};
use crate::verifier::{GROTH16_GATEWAY_KEY, PLONK_GATEWAY_KEY, VerifierKind};
use crate::version::version_to_key;
use alloy_primitives::{Address, hex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Transaction Builder file format version
pub const BATCH_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Register the release's verifiers on their gateways
    Add,
    /// Freeze the release's routes so the gateways stop accepting them
    Freeze,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Freeze => "freeze",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Freeze => "Freeze",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "freeze" => Ok(Self::Freeze),
            _ => Err(format!(
                "Unsupported action: {s}. Supported actions are: add, freeze"
            )),
        }
    }
}

/// A single call in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptor {
    pub to: String,
    pub value: String,
    pub data: String,
    /// 0 = call, 1 = delegatecall
    pub operation: u8,
    pub contract_method: ContractMethod,
    pub contract_inputs_values: BTreeMap<String, String>,
}

impl TransactionDescriptor {
    pub fn add_route(gateway: Address, verifier: Address) -> Self {
        Self::call(
            gateway,
            encode_add_route(verifier),
            ContractMethod::add_route(),
            ADD_ROUTE_INPUT,
            verifier.to_checksum(None),
        )
    }

    pub fn freeze_route(gateway: Address, selector: [u8; 4]) -> Self {
        Self::call(
            gateway,
            encode_freeze_route(selector),
            ContractMethod::freeze_route(),
            FREEZE_ROUTE_INPUT,
            hex::encode_prefixed(selector),
        )
    }

    fn call(
        to: Address,
        data: String,
        contract_method: ContractMethod,
        input_name: &str,
        input_value: String,
    ) -> Self {
        Self {
            to: to.to_checksum(None),
            value: "0".to_string(),
            data,
            operation: 0,
            contract_method,
            contract_inputs_values: BTreeMap::from([(input_name.to_string(), input_value)]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMeta {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub version: String,
    pub chain_id: String,
    /// Unix epoch milliseconds
    pub created_at: u64,
    pub meta: BatchMeta,
    pub transactions: Vec<TransactionDescriptor>,
}

impl Batch {
    pub fn new(
        chain_id: u64,
        version: &str,
        action: Action,
        created_at: u64,
        transactions: Vec<TransactionDescriptor>,
    ) -> Self {
        let verb = action.title();
        Self {
            version: BATCH_FORMAT_VERSION.to_string(),
            chain_id: chain_id.to_string(),
            created_at,
            meta: BatchMeta {
                name: format!("{verb} SP1 {version} Verifier Routes"),
                description: format!(
                    "Batch transaction to {} {version} Groth16 and Plonk verifier routes on their respective gateways on {}",
                    action.as_str(),
                    display_name(chain_id)
                ),
            },
            transactions,
        }
    }
}

/// Reads both gateway addresses; either one missing means nothing can be routed
fn gateways(record: &DeploymentRecord) -> Result<[(VerifierKind, Address); 2], BatchError> {
    let groth16 = record.address(VerifierKind::Groth16.gateway_key())?;
    let plonk = record.address(VerifierKind::Plonk.gateway_key())?;
    match (groth16, plonk) {
        (Some(groth16), Some(plonk)) => Ok([
            (VerifierKind::Groth16, groth16),
            (VerifierKind::Plonk, plonk),
        ]),
        _ => Err(BatchError::MissingGateways {
            groth16_key: GROTH16_GATEWAY_KEY,
            plonk_key: PLONK_GATEWAY_KEY,
        }),
    }
}

/// Builds the calls for `action` on one chain, or the reason there are none.
///
/// - `Add`: one `addRoute` per kind whose `<VERSION_KEY>_SP1_VERIFIER_<KIND>`
///   entry exists.
/// - `Freeze`: one `freezeRoute` per kind, using the checked-in selectors of
///   the release.
///
/// Both gateway entries must be present for either action.
pub fn build_transactions(
    record: &DeploymentRecord,
    version: &str,
    action: Action,
) -> Result<Vec<TransactionDescriptor>, BatchError> {
    let gateways = gateways(record)?;
    let version_key = version_to_key(version);

    match action {
        Action::Add => {
            let mut transactions = Vec::new();
            for (kind, gateway) in gateways {
                let key = kind.verifier_key(&version_key);
                if let Some(verifier) = record.address(&key)? {
                    log::info!("{kind}: {verifier} -> {gateway}");
                    transactions.push(TransactionDescriptor::add_route(gateway, verifier));
                }
            }
            if transactions.is_empty() {
                return Err(BatchError::NoVerifiers {
                    version: version.to_string(),
                    keys: VerifierKind::ALL
                        .iter()
                        .map(|kind| kind.verifier_key(&version_key))
                        .collect(),
                });
            }
            Ok(transactions)
        }
        Action::Freeze => {
            let selectors =
                freeze_selectors(&version_key).ok_or_else(|| BatchError::UnknownFreezeVersion {
                    version_key: version_key.clone(),
                    known: known_freeze_versions(),
                })?;
            Ok(gateways
                .into_iter()
                .map(|(kind, gateway)| {
                    let selector = selectors.for_kind(kind);
                    log::info!("{kind}: freeze {} on {gateway}", hex::encode_prefixed(selector));
                    TransactionDescriptor::freeze_route(gateway, selector)
                })
                .collect())
        }
    }
}

/// Builds the batch for one chain, or `None` when no call could be produced.
///
/// `created_at` is the only input that varies between otherwise identical
/// runs; callers pass the current time in epoch milliseconds.
pub fn build_batch(
    record: &DeploymentRecord,
    chain_id: u64,
    version: &str,
    action: Action,
    created_at: u64,
) -> Option<Batch> {
    match build_transactions(record, version, action) {
        Ok(transactions) => Some(Batch::new(
            chain_id,
            version,
            action,
            created_at,
            transactions,
        )),
        Err(err) => {
            log::debug!("No {action} batch for chain {chain_id}: {err}");
            None
        }
    }
}
