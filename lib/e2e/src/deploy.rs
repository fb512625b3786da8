use std::{path::Path, process::Command, str::FromStr};

use alloy::{
    primitives::{Address, TxHash},
    providers::Provider,
    signers::local::PrivateKeySigner,
};
use eyre::{Context, ContextCompat};
use regex::Regex;

use crate::{
    project::Crate,
    system::{env, wallet, DEPLOYER_ADDRESS},
    Constructor, Receipt,
};

/// A basic smart contract deployer.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    ctor: Option<Constructor>,
    contract_name: Option<String>,
    deployer_address: Option<Address>,
}

impl Deployer {
    /// Deployer sending transactions signed with `private_key` to `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self {
            rpc_url,
            private_key,
            ctor: None,
            contract_name: None,
            deployer_address: None,
        }
    }

    /// Add solidity constructor to the deployer.
    ///
    /// Contracts with a constructor are deployed through the
    /// `StylusDeployer` at `DEPLOYER_ADDRESS`.
    #[must_use]
    pub fn with_constructor(mut self, ctor: Constructor) -> Deployer {
        self.ctor = Some(ctor);
        self
    }

    /// Deploy the workspace member named `name` instead of the crate running
    /// the test.
    #[must_use]
    pub fn with_contract_name(mut self, name: &str) -> Deployer {
        self.contract_name = Some(name.to_owned());
        self
    }

    /// Use the `StylusDeployer` at `address` instead of reading
    /// `DEPLOYER_ADDRESS` from the environment.
    #[must_use]
    pub fn with_deployer_address(mut self, address: Address) -> Deployer {
        self.deployer_address = Some(address);
        self
    }

    /// Deploy and activate the configured contract.
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - Unable to collect information about the crate required for deployment.
    /// - `cargo stylus deploy` fails or prints no deployment.
    /// - The deployment receipt cannot be fetched.
    pub async fn deploy(self) -> eyre::Result<Receipt> {
        let pkg = Crate::new(self.contract_name.as_deref())?;
        self.deploy_wasm(&pkg.wasm).await
    }

    /// Deploy and activate the compiled contract at `wasm`.
    ///
    /// NOTE: It's expected that the contract was compiled beforehand with
    /// `cargo build --release --target wasm32-unknown-unknown`.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - A constructor is set but no `StylusDeployer` address is known.
    /// - `cargo stylus deploy` fails or prints no deployment.
    /// - The deployment receipt cannot be fetched.
    pub async fn deploy_wasm(self, wasm: &Path) -> eyre::Result<Receipt> {
        let wasm = wasm.to_string_lossy().to_string();

        let mut command = Command::new("cargo");
        command
            .args(["stylus", "deploy"])
            .args(["--wasm-file", &wasm])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .args(["--no-verify"]);

        if let Some(ctor) = &self.ctor {
            let deployer_address = match self.deployer_address {
                Some(address) => address.to_string(),
                None => env(DEPLOYER_ADDRESS)?,
            };
            command
                .args(["--deployer-address", &deployer_address])
                .args(["--constructor-signature", &ctor.signature]);
            if !ctor.args.is_empty() {
                command.arg("--constructor-args").args(&ctor.args);
            }
        }

        let output = command
            .output()
            .context("failed to execute `cargo stylus deploy` command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eyre::bail!("Deployment failed: {stderr}");
        }

        let (tx_hash, contract_address) =
            parse_deployment(&String::from_utf8_lossy(&output.stdout))?;

        let signer: PrivateKeySigner = self.private_key.parse()?;
        let provider = wallet(&signer, self.rpc_url.parse()?);
        let inner = provider
            .get_transaction_receipt(tx_hash)
            .await?
            .ok_or_else(|| eyre::eyre!("Transaction receipt not found"))?;

        Ok(Receipt { inner, contract_address })
    }
}

/// Extracts the deployment transaction hash and the contract address from the
/// output of `cargo stylus deploy`.
fn parse_deployment(output: &str) -> eyre::Result<(TxHash, Address)> {
    // The pattern matches a 0x followed by 64 hex characters
    let tx_hash_regex = Regex::new(r"0x[a-fA-F0-9]{64}")
        .context("Failed to create tx hash regex")?;

    // The pattern matches the contract address that is preceeded by
    // ANSI escape codes (`cargo stylus deploy` outputs colored text).
    let contract_addr_regex = Regex::new(
        r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
    )
    .context("Failed to create contract addr regex")?;

    let tx_hash = tx_hash_regex
        .find(output)
        .context(format!("No transaction hash found in output {output}"))?
        .as_str();

    let contract_addr = contract_addr_regex
        .captures(output)
        .and_then(|cap| cap.get(1))
        .context(format!("No contract address found in output {output}"))?
        .as_str();

    let contract_address = Address::from_str(contract_addr).context(format!(
        "Failed to parse contract address from string: {contract_addr}"
    ))?;
    let tx_hash = TxHash::from_str(tx_hash)
        .context("Failed to parse transaction hash")?;

    Ok((tx_hash, contract_address))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};

    use super::*;

    #[test]
    fn parses_colored_deploy_output() {
        let output = "deployed code at address: \x1b[1;94m0x5fbdb2315678afecb367f032d93f642f64180aa3\x1b[0m\n\
            deployment tx hash: \x1b[1;94m0x4f8a3e1f7d6b8a9c0e2d1f3a5b7c9e0d2f4a6b8c0e1d3f5a7b9c1e3d5f7a9b1c\x1b[0m";

        let (tx_hash, address) =
            parse_deployment(output).expect("should parse output");

        assert_eq!(
            address,
            address!("0x5fbdb2315678afecb367f032d93f642f64180aa3")
        );
        assert_eq!(
            tx_hash,
            b256!(
                "0x4f8a3e1f7d6b8a9c0e2d1f3a5b7c9e0d2f4a6b8c0e1d3f5a7b9c1e3d5f7a9b1c"
            )
        );
    }

    #[test]
    fn rejects_output_without_address() {
        let err = parse_deployment("nothing was deployed")
            .expect_err("should not parse");
        assert!(err.to_string().contains("No transaction hash"));
    }
}
