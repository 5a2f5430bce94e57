use safe_batch::ChainGroup;
use safe_batch::chains::{MAINNET_CHAINS, TESTNET_CHAINS, display_name};
use std::fmt;

/// Chains selected with `--chain`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainSelection {
    Group(ChainGroup),
    Single(u64),
}

impl ChainSelection {
    pub fn chain_ids(&self) -> Vec<u64> {
        match self {
            Self::Group(group) => group.chain_ids(),
            Self::Single(chain_id) => vec![*chain_id],
        }
    }
}

impl fmt::Display for ChainSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => write!(f, "all {group} chains"),
            Self::Single(chain_id) => write!(f, "{} ({chain_id})", display_name(*chain_id)),
        }
    }
}

/// Parses a chain group name or a numeric chain ID.
/// Unsupported IDs are accepted; their deployment file decides.
pub fn parse_chain(chain: &str) -> Result<ChainSelection, String> {
    if let Ok(group) = chain.parse::<ChainGroup>() {
        return Ok(ChainSelection::Group(group));
    }
    chain.parse::<u64>().map(ChainSelection::Single).map_err(|_| {
        format!("Invalid chain: {chain}. Use a chain ID or one of: mainnet, testnet, all")
    })
}

/// Lines describing the supported chains, grouped
pub fn available_chains() -> Vec<String> {
    let mut lines = vec!["Mainnet:".to_string()];
    lines.extend(
        MAINNET_CHAINS
            .entries()
            .map(|(id, name)| format!("  {id}: {name}")),
    );
    lines.push("Testnet:".to_string());
    lines.extend(
        TESTNET_CHAINS
            .entries()
            .map(|(id, name)| format!("  {id}: {name}")),
    );
    lines
}
