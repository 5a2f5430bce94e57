//! Per-chain deployment records
//!
//! Each chain has a flat JSON object at `<dir>/<chainId>.json` mapping
//! deployment keys to contract addresses, e.g.
//!
//! ```json
//! {
//!   "SP1_VERIFIER_GATEWAY_GROTH16": "0x397A5f7f3dBd538f23DE225B51f532c34448dA9B",
//!   "V5_0_0_SP1_VERIFIER_GROTH16": "0xa27A057CAb1a4798c6242F6eE5b2416B7Cd45E5D"
//! }
//! ```

use crate::error::BatchError;
use alloy_primitives::Address;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DeploymentRecord {
    entries: Map<String, Value>,
}

impl DeploymentRecord {
    /// Path of the record for a chain inside a deployments directory
    pub fn path_for(dir: impl AsRef<Path>, chain_id: u64) -> PathBuf {
        dir.as_ref().join(format!("{chain_id}.json"))
    }

    /// Parses a record. The top level must be a JSON object.
    pub fn from_json_str(contents: &str) -> Result<Self, BatchError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| BatchError::DeploymentRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&contents)
    }

    /// Loads `<dir>/<chainId>.json`
    pub fn load(dir: impl AsRef<Path>, chain_id: u64) -> Result<Self, BatchError> {
        Self::from_file(Self::path_for(dir, chain_id))
    }

    /// Returns the value under `key` if it is a non-empty string
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parses the value under `key` as an address.
    ///
    /// Absent or empty values are `Ok(None)`; present values that do not
    /// parse are an error naming the key.
    pub fn address(&self, key: &str) -> Result<Option<Address>, BatchError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .parse::<Address>()
            .map(Some)
            .map_err(|_| BatchError::InvalidAddress {
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DeploymentRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_non_string_values_are_absent() {
        let record = DeploymentRecord::from_json_str(
            r#"{ "A": "", "B": 42, "C": null, "D": "0x0000000000000000000000000000000000000001" }"#,
        )
        .unwrap();

        assert_eq!(record.get("A"), None);
        assert_eq!(record.get("B"), None);
        assert_eq!(record.get("C"), None);
        assert_eq!(record.get("MISSING"), None);
        assert!(record.contains("D"));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            DeploymentRecord::from_json_str("[1, 2]"),
            Err(BatchError::DeploymentParse(_))
        ));
        assert!(matches!(
            DeploymentRecord::from_json_str("{ not json"),
            Err(BatchError::DeploymentParse(_))
        ));
    }

    #[test]
    fn test_address_lookup() {
        let record: DeploymentRecord = [
            ("GOOD", "0x397A5f7f3dBd538f23DE225B51f532c34448dA9B"),
            ("BAD", "0x1234"),
        ]
        .into_iter()
        .collect();

        let good = record.address("GOOD").unwrap().unwrap();
        assert_eq!(
            good,
            "0x397a5f7f3dbd538f23de225b51f532c34448da9b"
                .parse::<Address>()
                .unwrap()
        );
        assert!(record.address("MISSING").unwrap().is_none());
        assert!(matches!(
            record.address("BAD"),
            Err(BatchError::InvalidAddress { key, .. }) if key == "BAD"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = DeploymentRecord::load("/nonexistent-deployments", 1).unwrap_err();
        assert!(matches!(err, BatchError::DeploymentRead { .. }));
        assert!(err.to_string().contains("1.json"));
    }

    #[test]
    fn test_path_for() {
        assert_eq!(
            DeploymentRecord::path_for("contracts/deployments", 8453),
            PathBuf::from("contracts/deployments/8453.json")
        );
    }
}
