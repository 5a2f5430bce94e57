//! Chains where the verifier gateways are governed by a Safe
//!
//! The tables are ordered; batches are generated in table order.

use std::fmt;
use std::str::FromStr;

pub static MAINNET_CHAINS: phf::OrderedMap<u64, &'static str> = phf::phf_ordered_map! {
    1u64 => "Ethereum Mainnet",
    10u64 => "Optimism",
    42161u64 => "Arbitrum One",
    8453u64 => "Base",
    534352u64 => "Scroll",
};

pub static TESTNET_CHAINS: phf::OrderedMap<u64, &'static str> = phf::phf_ordered_map! {
    11155111u64 => "Sepolia",
    11155420u64 => "OP Sepolia",
    421614u64 => "Arbitrum Sepolia",
    84532u64 => "Base Sepolia",
    534351u64 => "Scroll Sepolia",
};

/// Name of a supported chain
pub fn chain_name(chain_id: u64) -> Option<&'static str> {
    MAINNET_CHAINS
        .get(&chain_id)
        .or_else(|| TESTNET_CHAINS.get(&chain_id))
        .copied()
}

/// Name of a chain, falling back to `Chain <id>` for unsupported ones
pub fn display_name(chain_id: u64) -> String {
    chain_name(chain_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Chain {chain_id}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainGroup {
    Mainnet,
    Testnet,
    All,
}

impl ChainGroup {
    pub fn chain_ids(&self) -> Vec<u64> {
        let mainnet = MAINNET_CHAINS.keys().copied();
        let testnet = TESTNET_CHAINS.keys().copied();
        match self {
            Self::Mainnet => mainnet.collect(),
            Self::Testnet => testnet.collect(),
            Self::All => mainnet.chain(testnet).collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ChainGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChainGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "Unknown chain group: {s}. Supported groups are: mainnet, testnet, all"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_table_order() {
        assert_eq!(
            ChainGroup::Mainnet.chain_ids(),
            vec![1, 10, 42161, 8453, 534352]
        );
        let all = ChainGroup::All.chain_ids();
        assert_eq!(all.len(), 10);
        assert_eq!(all[5], 11155111);
    }

    #[test]
    fn test_names() {
        assert_eq!(chain_name(8453), Some("Base"));
        assert_eq!(chain_name(84532), Some("Base Sepolia"));
        assert_eq!(display_name(999), "Chain 999");
    }

    #[test]
    fn test_group_parsing() {
        assert_eq!("Testnet".parse::<ChainGroup>(), Ok(ChainGroup::Testnet));
        assert!("devnet".parse::<ChainGroup>().is_err());
    }
}
