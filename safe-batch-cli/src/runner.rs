use crate::chains::ChainSelection;
use anyhow::{Context, Result};
use safe_batch::chains::display_name;
use safe_batch::{Action, Batch, DeploymentRecord, build_transactions, version_to_filename};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

/// Everything a run needs, resolved from flags and environment
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub chains: ChainSelection,
    pub version: String,
    pub action: Action,
    pub deployments_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Batch files written, or that would be written on a dry run
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<u64>,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.generated.len() + self.skipped.len()
    }
}

/// `<output_dir>/<chainId>_<version>_<action>.json`, e.g. `1_v6_0_0_beta_1_add.json`
pub fn output_path(output_dir: &Path, chain_id: u64, version: &str, action: Action) -> PathBuf {
    output_dir.join(format!(
        "{chain_id}_{}_{action}.json",
        version_to_filename(version)
    ))
}

/// Generates one batch per selected chain.
///
/// A chain that cannot produce a batch is logged and skipped. Only failing
/// to create the output directory aborts the run.
pub fn run(config: &RunConfig, created_at: u64) -> Result<RunSummary> {
    if !config.dry_run {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;
    }

    let mut summary = RunSummary::default();
    for chain_id in config.chains.chain_ids() {
        let span = info_span!("chain", chain_id);
        let _guard = span.enter();

        info!("Processing {} ({chain_id})", display_name(chain_id));
        match process_chain(config, chain_id, created_at) {
            Ok(path) => {
                info!("-> {}", path.display());
                summary.generated.push(path);
            }
            Err(err) => {
                warn!("Skipping chain {chain_id}: {err:#}");
                summary.skipped.push(chain_id);
            }
        }
    }

    Ok(summary)
}

fn process_chain(config: &RunConfig, chain_id: u64, created_at: u64) -> Result<PathBuf> {
    let record = DeploymentRecord::load(&config.deployments_dir, chain_id)?;
    let transactions = build_transactions(&record, &config.version, config.action)?;
    let batch = Batch::new(
        chain_id,
        &config.version,
        config.action,
        created_at,
        transactions,
    );

    let path = output_path(&config.output_dir, chain_id, &config.version, config.action);
    let json = serde_json::to_string_pretty(&batch).context("Failed to serialize batch")?;

    if config.dry_run {
        println!("{json}");
    } else {
        fs::write(&path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_batch::ChainGroup;
    use tempfile::TempDir;

    const GROTH16_GATEWAY: &str = "0x397A5f7f3dBd538f23DE225B51f532c34448dA9B";
    const PLONK_GATEWAY: &str = "0x3B6041173B80E77f038f3F2C0f9744f04837185e";
    const V5_GROTH16: &str = "0xa27A057CAb1a4798c6242F6eE5b2416B7Cd45E5D";
    const V5_PLONK: &str = "0xE00a3cBFC45241b33c0A44C78e26168CBc55EC63";

    fn write_deployment(dir: &Path, chain_id: u64, json: serde_json::Value) {
        fs::write(
            DeploymentRecord::path_for(dir, chain_id),
            serde_json::to_string_pretty(&json).unwrap(),
        )
        .unwrap();
    }

    fn config(deployments: &TempDir, output: &Path, chains: ChainSelection, action: Action) -> RunConfig {
        RunConfig {
            chains,
            version: "v5.0.0".to_string(),
            action,
            deployments_dir: deployments.path().to_path_buf(),
            output_dir: output.to_path_buf(),
            dry_run: false,
        }
    }

    fn seed_mainnet(dir: &Path) {
        // Ethereum: complete
        write_deployment(
            dir,
            1,
            serde_json::json!({
                "SP1_VERIFIER_GATEWAY_GROTH16": GROTH16_GATEWAY,
                "SP1_VERIFIER_GATEWAY_PLONK": PLONK_GATEWAY,
                "V5_0_0_SP1_VERIFIER_GROTH16": V5_GROTH16,
                "V5_0_0_SP1_VERIFIER_PLONK": V5_PLONK,
            }),
        );
        // Optimism: no gateways
        write_deployment(
            dir,
            10,
            serde_json::json!({ "V5_0_0_SP1_VERIFIER_GROTH16": V5_GROTH16 }),
        );
        // Arbitrum: malformed
        fs::write(DeploymentRecord::path_for(dir, 42161), "{ \"SP1_").unwrap();
        // Base and Scroll have no file at all
    }

    #[test]
    fn test_run_skips_bad_chains_and_writes_good_ones() {
        let deployments = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        seed_mainnet(deployments.path());
        let out_dir = output.path().join("nested").join("safe-batches");

        let summary = run(
            &config(
                &deployments,
                &out_dir,
                ChainSelection::Group(ChainGroup::Mainnet),
                Action::Add,
            ),
            42,
        )
        .unwrap();

        assert_eq!(summary.generated, vec![out_dir.join("1_v5_0_0_add.json")]);
        assert_eq!(summary.skipped, vec![10, 42161, 8453, 534352]);
        assert_eq!(summary.attempted(), 5);

        let written: Batch =
            serde_json::from_str(&fs::read_to_string(&summary.generated[0]).unwrap()).unwrap();
        assert_eq!(written.chain_id, "1");
        assert_eq!(written.created_at, 42);
        assert_eq!(written.transactions.len(), 2);
    }

    #[test]
    fn test_freeze_writes_action_specific_file() {
        let deployments = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        seed_mainnet(deployments.path());

        let summary = run(
            &config(
                &deployments,
                output.path(),
                ChainSelection::Single(1),
                Action::Freeze,
            ),
            0,
        )
        .unwrap();

        let path = output.path().join("1_v5_0_0_freeze.json");
        assert_eq!(summary.generated, vec![path.clone()]);
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"freezeRoute\""));
        assert!(contents.ends_with("}\n"));
    }

    #[test]
    fn test_unknown_freeze_version_is_a_skip() {
        let deployments = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        seed_mainnet(deployments.path());

        let mut config = config(
            &deployments,
            output.path(),
            ChainSelection::Single(1),
            Action::Freeze,
        );
        config.version = "v6.0.0-beta.1".to_string();

        let summary = run(&config, 0).unwrap();
        assert!(summary.generated.is_empty());
        assert_eq!(summary.skipped, vec![1]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let deployments = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        seed_mainnet(deployments.path());
        let out_dir = output.path().join("never-created");

        let mut config = config(
            &deployments,
            &out_dir,
            ChainSelection::Single(1),
            Action::Add,
        );
        config.dry_run = true;

        let summary = run(&config, 0).unwrap();
        assert_eq!(summary.generated.len(), 1);
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), 8453, "v6.0.0-beta.1", Action::Add),
            PathBuf::from("out/8453_v6_0_0_beta_1_add.json")
        );
    }
}
