//! Route selectors for freezing released verifiers
//!
//! A route is keyed by the first 4 bytes of the verifier's `VERIFIER_HASH`.
//! These are read off the deployed verifier contracts and checked in here;
//! they are not derived from the version string. Freezing a release that is
//! missing from this table is refused, so every release that may need to be
//! frozen must get an entry.

use crate::verifier::VerifierKind;

/// Route selectors of one release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeSelectors {
    pub groth16: [u8; 4],
    pub plonk: [u8; 4],
}

impl FreezeSelectors {
    pub fn for_kind(&self, kind: VerifierKind) -> [u8; 4] {
        match kind {
            VerifierKind::Groth16 => self.groth16,
            VerifierKind::Plonk => self.plonk,
        }
    }
}

// Keyed by normalized version key (see `version_to_key`)
pub static FREEZE_SELECTORS: phf::Map<&'static str, FreezeSelectors> = phf::phf_map! {
    "V4_0_0_RC_3" => FreezeSelectors {
        groth16: [0x11, 0xb6, 0xa0, 0x9d],
        plonk: [0xd4, 0xe8, 0xec, 0xd2],
    },
    "V5_0_0" => FreezeSelectors {
        groth16: [0xa4, 0x59, 0x4c, 0x59],
        plonk: [0xd4, 0xe8, 0xec, 0xd2],
    },
};

pub fn freeze_selectors(version_key: &str) -> Option<&'static FreezeSelectors> {
    FREEZE_SELECTORS.get(version_key)
}

/// Version keys that can be frozen, sorted
pub fn known_freeze_versions() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = FREEZE_SELECTORS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_version_key() {
        let v5 = freeze_selectors("V5_0_0").unwrap();
        assert_eq!(v5.for_kind(VerifierKind::Groth16), [0xa4, 0x59, 0x4c, 0x59]);
        assert_eq!(v5.for_kind(VerifierKind::Plonk), v5.plonk);
    }

    #[test]
    fn test_lookup_is_exact() {
        // Callers normalize first; raw tags are not keys
        assert!(freeze_selectors("v5.0.0").is_none());
        assert!(freeze_selectors("V6_0_0_BETA_1").is_none());
    }

    #[test]
    fn test_known_versions_sorted() {
        assert_eq!(known_freeze_versions(), vec!["V4_0_0_RC_3", "V5_0_0"]);
    }
}
