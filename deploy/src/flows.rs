//! The v1 deployment and the v2 upgrade.
//!
//! Every transaction is awaited to inclusion before the next step runs, and
//! the first failure aborts the flow. Nothing is rolled back.
use std::path::{Path, PathBuf};

use alloy::primitives::{Address, U256};
use e2e::{constructor, watch, Account, Constructor, Receipt};
use eyre::Context;

use crate::{
    abi::{CounterFactory, CounterV1, CounterV2},
    config::{Config, V2Addresses},
    verify::{VerificationRequest, Verifier},
};

/// A deployable contract of the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contract {
    /// Crate directory, relative to the workspace root.
    pub crate_dir: &'static str,
    /// Name of the `#[entrypoint]` type.
    pub name: &'static str,
    /// Stem of the compiled wasm binary.
    pub wasm: &'static str,
}

/// First counter implementation.
pub const COUNTER_V1: Contract = Contract {
    crate_dir: "counters/counter-v1",
    name: "CounterV1",
    wasm: "counter_v1",
};

/// Second counter implementation.
pub const COUNTER_V2: Contract = Contract {
    crate_dir: "counters/counter-v2",
    name: "CounterV2",
    wasm: "counter_v2",
};

/// The factory and beacon of every counter.
pub const COUNTER_FACTORY: Contract = Contract {
    crate_dir: "counters/counter-factory",
    name: "CounterFactory",
    wasm: "counter_factory",
};

impl Contract {
    /// `<crate-dir>:<ContractName>`.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.crate_dir, self.name)
    }

    /// Path of the release wasm binary under `workspace_root`.
    #[must_use]
    pub fn wasm_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root
            .join("target")
            .join("wasm32-unknown-unknown")
            .join("release")
            .join(format!("{}.wasm", self.wasm))
    }
}

/// A contract deployed by one of the flows.
struct Deployment {
    contract: Contract,
    receipt: Receipt,
    constructor: Constructor,
}

impl Deployment {
    fn address(&self) -> Address {
        self.receipt.contract_address
    }

    fn verification_request(&self) -> VerificationRequest {
        VerificationRequest {
            address: self.address(),
            deployment_tx: self.receipt.inner.transaction_hash,
            contract: self.contract.identifier(),
            constructor_args: self.constructor.args.clone(),
        }
    }
}

/// Shared state of a flow run.
pub struct Session<'a> {
    account: Account,
    config: &'a Config,
    verifier: &'a dyn Verifier,
    workspace_root: &'a Path,
}

impl<'a> Session<'a> {
    /// Connects the account of `config.private_key` to `config.rpc_url`.
    ///
    /// # Errors
    ///
    /// If the private key or the rpc url is malformed.
    pub fn new(
        config: &'a Config,
        verifier: &'a dyn Verifier,
        workspace_root: &'a Path,
    ) -> eyre::Result<Self> {
        let account =
            Account::from_private_key(&config.private_key, &config.rpc_url)?;
        log::info!("running as {}", account.address());
        Ok(Self { account, config, verifier, workspace_root })
    }

    async fn deploy(
        &self,
        contract: Contract,
        constructor: Constructor,
    ) -> eyre::Result<Deployment> {
        log::info!("deploying {}", contract.name);

        let receipt = self
            .account
            .as_deployer()
            .with_deployer_address(self.config.deployer_address)
            .with_constructor(constructor.clone())
            .deploy_wasm(&contract.wasm_path(self.workspace_root))
            .await
            .wrap_err(format!("failed to deploy {}", contract.crate_dir))?;

        log::info!(
            "{} deployed at {}",
            contract.name,
            receipt.contract_address
        );
        Ok(Deployment { contract, receipt, constructor })
    }

    fn verify(&self, deployment: &Deployment) -> eyre::Result<()> {
        self.verifier
            .verify(&deployment.verification_request())
            .wrap_err(format!("failed to verify {}", deployment.contract.name))
    }
}

/// Deploys `CounterV1` and the factory, verifies both, creates a counter
/// named `config.counter_name` and returns its proxy address.
///
/// # Errors
///
/// On the first step that fails.
pub async fn deploy_v1(session: &Session<'_>) -> eyre::Result<Address> {
    let implementation = session.deploy(COUNTER_V1, constructor!()).await?;
    let factory = session
        .deploy(
            COUNTER_FACTORY,
            constructor!(implementation.address(), session.account.address()),
        )
        .await?;

    session.verify(&implementation)?;
    session.verify(&factory)?;

    let contract =
        CounterFactory::new(factory.address(), &session.account.wallet);
    watch!(contract.create(session.config.counter_name.clone()))
        .wrap_err("failed to create the counter")?;

    let proxy = contract
        .getCounter(U256::ZERO)
        .call()
        .await
        .wrap_err("failed to read the created counter")?
        .counter;
    println!("Created proxy: {proxy}");

    Ok(proxy)
}

/// Counts the proxy up with v1, upgrades the factory to a new `CounterV2`,
/// resets the proxy with v2 and verifies the new implementation.
///
/// Returns the address of the v2 implementation.
///
/// # Errors
///
/// On the first step that fails.
pub async fn deploy_v2(
    session: &Session<'_>,
    addresses: V2Addresses,
) -> eyre::Result<Address> {
    let V2Addresses { factory, proxy } = addresses;
    let wallet = &session.account.wallet;

    let counter = CounterV1::new(proxy, wallet);
    watch!(counter.up()).wrap_err("failed to count up")?;
    let value = counter.value().call().await?.value;
    println!("Value ver1: {value}");

    let implementation = session.deploy(COUNTER_V2, constructor!()).await?;

    let factory = CounterFactory::new(factory, wallet);
    watch!(factory.update(implementation.address()))
        .wrap_err("failed to update the implementation")?;

    let counter = CounterV2::new(proxy, wallet);
    watch!(counter.reset()).wrap_err("failed to reset the counter")?;
    let value = counter.value().call().await?.value;
    println!("Value ver2: {value}");

    session.verify(&implementation)?;

    Ok(implementation.address())
}
