//! Source verification of deployed contracts.
use std::{
    path::{Path, PathBuf},
    process::Command,
};

use alloy::primitives::{Address, TxHash};
use eyre::{bail, Context, ContextCompat};

use crate::config::Config;

/// A contract to verify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Where the contract was deployed.
    pub address: Address,
    /// Transaction that deployed it.
    pub deployment_tx: TxHash,
    /// `<crate-dir>:<ContractName>`, e.g. `counters/counter-v1:CounterV1`.
    pub contract: String,
    /// Constructor arguments, empty for argument-less constructors.
    pub constructor_args: Vec<String>,
}

impl VerificationRequest {
    /// Directory of the crate holding the contract, relative to the
    /// workspace root.
    ///
    /// # Errors
    ///
    /// If the identifier is not of the form `<crate-dir>:<ContractName>`.
    pub fn crate_dir(&self) -> eyre::Result<&str> {
        self.contract
            .split_once(':')
            .map(|(dir, _)| dir)
            .filter(|dir| !dir.is_empty())
            .context(format!(
                "contract identifier `{}` is not `<crate-dir>:<ContractName>`",
                self.contract
            ))
    }
}

/// Something able to verify a deployed contract.
pub trait Verifier {
    /// Verifies the contract described by `request`.
    ///
    /// # Errors
    ///
    /// If verification could not run or failed.
    fn verify(&self, request: &VerificationRequest) -> eyre::Result<()>;
}

/// Verifies contracts with `cargo stylus verify`.
#[derive(Clone, Debug)]
pub struct CargoStylusVerifier {
    rpc_url: String,
    workspace_root: PathBuf,
}

impl CargoStylusVerifier {
    /// Verifier running against `rpc_url`, resolving crate directories from
    /// `workspace_root`.
    #[must_use]
    pub fn new(rpc_url: String, workspace_root: PathBuf) -> Self {
        Self { rpc_url, workspace_root }
    }

    /// The verification command for `request`.
    ///
    /// # Errors
    ///
    /// If the contract identifier is malformed.
    pub fn command(
        &self,
        request: &VerificationRequest,
    ) -> eyre::Result<Command> {
        let mut command = Command::new("cargo");
        command
            .current_dir(self.workspace_root.join(request.crate_dir()?))
            .args(["stylus", "verify"])
            .args(["--endpoint", &self.rpc_url])
            .args(["--deployment-tx", &request.deployment_tx.to_string()]);
        Ok(command)
    }
}

impl Verifier for CargoStylusVerifier {
    fn verify(&self, request: &VerificationRequest) -> eyre::Result<()> {
        // `cargo stylus verify` replays the deployment transaction, which
        // already carries the constructor calldata, so the arguments are not
        // passed on the command line.
        log::info!(
            "verifying {} at {} against {}, constructor args {:?} taken from \
             the deployment",
            request.contract,
            request.address,
            request.deployment_tx,
            request.constructor_args
        );

        let output = self
            .command(request)?
            .output()
            .wrap_err("failed to execute `cargo stylus verify` command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("verification of {} failed: {stderr}", request.contract);
        }

        log::info!("verified {}", request.contract);
        Ok(())
    }
}

/// Skips verification, e.g. on a local node.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipVerifier;

impl Verifier for SkipVerifier {
    fn verify(&self, request: &VerificationRequest) -> eyre::Result<()> {
        log::info!(
            "skipping verification of {} at {}",
            request.contract,
            request.address
        );
        Ok(())
    }
}

/// The verifier selected by `config.verify`.
#[must_use]
pub fn from_config(
    config: &Config,
    workspace_root: &Path,
) -> Box<dyn Verifier> {
    if config.verify {
        Box::new(CargoStylusVerifier::new(
            config.rpc_url.clone(),
            workspace_root.to_path_buf(),
        ))
    } else {
        Box::new(SkipVerifier)
    }
}
