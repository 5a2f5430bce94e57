use crate::chains::{ChainSelection, available_chains, parse_chain};
use crate::logging;
use crate::runner::{RunConfig, RunSummary, run};
use clap::{Arg, ArgMatches, Command};
use safe_batch::Action;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

const DEFAULT_VERSION: &str = "v6.0.0-beta.1";

fn command() -> Command {
    Command::new("safe-batch")
        .about("Generates Safe Transaction Builder JSON to add or freeze SP1 verifier routes")
        .after_help(
            "Upload the generated files in Safe UI -> Apps -> Transaction Builder -> Load",
        )
        .arg(
            Arg::new("chain")
                .short('c')
                .long("chain")
                .value_name("CHAIN")
                .help("Chain ID, or a chain group: mainnet, testnet, all")
                .value_parser(parse_chain)
                .default_value("mainnet"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .value_name("VERSION")
                .help("SP1 release tag, e.g. v6.0.0-beta.1")
                .default_value(DEFAULT_VERSION),
        )
        .arg(
            Arg::new("action")
                .short('a')
                .long("action")
                .value_name("ACTION")
                .help("Add the release's verifier routes, or freeze them")
                .value_parser(["add", "freeze"])
                .default_value("add"),
        )
        .arg(
            Arg::new("deployments-dir")
                .long("deployments-dir")
                .value_name("DIR")
                .help("Directory holding <chainId>.json deployment records")
                .env("SAFE_BATCH_DEPLOYMENTS_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("contracts/deployments"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory batches are written to, created if missing")
                .env("SAFE_BATCH_OUTPUT_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("contracts/safe-batches"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print batches to stdout instead of writing files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .help("Emit logs as bunyan JSON lines")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-chains")
                .long("list-chains")
                .help("List the supported chains and exit")
                .action(clap::ArgAction::SetTrue),
        )
}

fn run_config(matches: &ArgMatches) -> RunConfig {
    let action = matches
        .get_one::<String>("action")
        .expect("Action has default value")
        .parse::<Action>()
        .expect("Action is restricted by the value parser");

    RunConfig {
        chains: *matches
            .get_one::<ChainSelection>("chain")
            .expect("Chain has default value"),
        version: matches
            .get_one::<String>("version")
            .expect("Version has default value")
            .clone(),
        action,
        deployments_dir: matches
            .get_one::<PathBuf>("deployments-dir")
            .expect("Deployments dir has default value")
            .clone(),
        output_dir: matches
            .get_one::<PathBuf>("output-dir")
            .expect("Output dir has default value")
            .clone(),
        dry_run: matches.get_flag("dry-run"),
    }
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!();
    println!(
        "Summary: {} generated, {} skipped",
        summary.generated.len(),
        summary.skipped.len()
    );

    if summary.generated.is_empty() || dry_run {
        return;
    }

    println!();
    println!("Next steps:");
    println!("  1. Open Safe UI for each chain");
    println!("  2. Go to Apps -> Transaction Builder");
    println!("  3. Click \"Upload JSON\" and select the generated file");
    println!("  4. Review transactions and execute the batch");
}

/// app cli
pub struct Cli;
impl Cli {
    /// Parses arguments, generates the batches and prints the summary.
    ///
    /// Invalid arguments exit through clap before anything is read. Chains
    /// that are skipped do not change the exit code.
    pub fn execute() -> ExitCode {
        let matches = command().get_matches();

        if matches.get_flag("list-chains") {
            for line in available_chains() {
                println!("{line}");
            }
            return ExitCode::SUCCESS;
        }

        if let Err(err) = logging::init(matches.get_flag("json-logs")) {
            eprintln!("Error: failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        }

        let config = run_config(&matches);
        println!("Generating Safe Transaction Builder batches");
        println!("  Action:  {}", config.action);
        println!("  Version: {}", config.version);
        println!("  Chains:  {}", config.chains);
        println!();

        let created_at = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        match run(&config, created_at) {
            Ok(summary) => {
                print_summary(&summary, config.dry_run);
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        }
    }
}
