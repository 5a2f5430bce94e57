use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("No deployment file at {path}")]
    DeploymentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed deployment record")]
    DeploymentParse(#[from] serde_json::Error),

    #[error("Missing gateway addresses ({groth16_key}, {plonk_key})")]
    MissingGateways {
        groth16_key: &'static str,
        plonk_key: &'static str,
    },

    #[error("No verifiers found for {version}, looked for keys: {}", .keys.join(", "))]
    NoVerifiers { version: String, keys: Vec<String> },

    #[error("No freeze selectors known for {version_key} (known: {})", .known.join(", "))]
    UnknownFreezeVersion {
        version_key: String,
        known: Vec<&'static str>,
    },

    #[error("Invalid address under {key}: {value}")]
    InvalidAddress { key: String, value: String },
}
