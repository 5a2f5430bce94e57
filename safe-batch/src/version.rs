//! Version string normalization
//!
//! Deployment records key verifier addresses by an upper-cased form of the
//! release tag, and output files are named after a lower-cased one:
//!
//! | version         | key             | filename        |
//! |-----------------|-----------------|-----------------|
//! | `v6.0.0-beta.1` | `V6_0_0_BETA_1` | `v6_0_0_beta_1` |
//! | `v4.0.0-rc.3`   | `V4_0_0_RC_3`   | `v4_0_0_rc_3`   |
//! | `v5.0.0`        | `V5_0_0`        | `v5_0_0`        |

/// Converts a release tag into the deployment record key prefix
pub fn version_to_key(version: &str) -> String {
    version_to_filename(version).to_uppercase()
}

/// Converts a release tag into the form used in batch file names.
/// Case is preserved.
pub fn version_to_filename(version: &str) -> String {
    version.replace(['.', '-'], "_")
}
