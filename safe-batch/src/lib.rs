//! Safe Transaction Builder batches for SP1 verifier gateway routes.
//!
//! Given the deployment record of a chain, this crate encodes the
//! `addRoute(address)` / `freezeRoute(bytes4)` calls against the Groth16 and
//! Plonk gateways and wraps them in the JSON document the Safe{Wallet}
//! Transaction Builder app loads.
//!
//! # Example
//!
//! ```rust,ignore
//! use safe_batch::{Action, DeploymentRecord, build_batch};
//!
//! let record = DeploymentRecord::from_json_str(&contents)?;
//! if let Some(batch) = build_batch(&record, 1, "v5.0.0", Action::Add, created_at) {
//!     println!("{}", serde_json::to_string_pretty(&batch)?);
//! }
//! ```

pub mod batch;
pub mod calldata;
pub mod chains;
pub mod deployment;
pub mod error;
pub mod selectors;
pub mod verifier;
pub mod version;

pub use batch::{Action, Batch, BatchMeta, TransactionDescriptor, build_batch, build_transactions};
pub use chains::ChainGroup;
pub use deployment::DeploymentRecord;
pub use error::BatchError;
pub use verifier::VerifierKind;
pub use version::{version_to_filename, version_to_key};
