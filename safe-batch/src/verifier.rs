use std::fmt;

pub const GROTH16_GATEWAY_KEY: &str = "SP1_VERIFIER_GATEWAY_GROTH16";
pub const PLONK_GATEWAY_KEY: &str = "SP1_VERIFIER_GATEWAY_PLONK";

/// Proof systems with their own gateway and verifier per release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifierKind {
    Groth16,
    Plonk,
}

impl VerifierKind {
    /// Batch order: Groth16 first, then Plonk
    pub const ALL: [VerifierKind; 2] = [VerifierKind::Groth16, VerifierKind::Plonk];

    pub fn gateway_key(&self) -> &'static str {
        match self {
            Self::Groth16 => GROTH16_GATEWAY_KEY,
            Self::Plonk => PLONK_GATEWAY_KEY,
        }
    }

    /// Record key of this kind's verifier for a normalized version key,
    /// e.g. `V5_0_0_SP1_VERIFIER_GROTH16`
    pub fn verifier_key(&self, version_key: &str) -> String {
        format!("{version_key}_SP1_VERIFIER_{}", self.as_str().to_uppercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groth16 => "Groth16",
            Self::Plonk => "Plonk",
        }
    }
}

impl fmt::Display for VerifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
